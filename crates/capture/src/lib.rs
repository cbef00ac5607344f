//! Captured network requests and the sources that hand them to the listing core.
//!
//! The capture side owns the records; the listing core only ever sees a snapshot taken at call
//! time (see [`RequestSource::snapshot`]).

mod error;
mod record;
pub mod render;
mod source;

pub use error::{Result, SourceError};
pub use record::{find_by_url, NetworkRequest, RequestStatus};
pub use source::{CaptureFile, MemorySource, RequestSource};
