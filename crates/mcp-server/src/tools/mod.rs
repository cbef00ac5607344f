//! netpage MCP tool surface.
//!
//! Schemas live apart from dispatch so the wire contract can be read on its own.

mod dispatch;
mod schemas;

pub use dispatch::NetpageService;
