//! Pagination and type filtering over captured request records.
//!
//! Three stateless pieces, evaluated leaf-first:
//!
//! - [`filter`] keeps records whose category is in a requested, allow-listed set;
//! - [`paginate`] windows a collection and derives positional page tokens;
//! - [`ListingService`] runs the filter, then the paginator, over a caller-owned snapshot.
//!
//! Tokens are offsets into the filtered view. They stay valid while the underlying collection only
//! grows at the end; any other mutation between calls makes them meaningless.

pub mod filter;
pub mod listing;
pub mod paginate;

pub use filter::{filter, Categorized, CategoryFilter};
pub use listing::{ListingOptions, ListingService};
pub use paginate::{paginate, PaginationConfig, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_ENV};

pub use netpage_protocol::{
    ListingResult, PaginationOptions, PaginationResult, RequestTypeFilter, ResourceType,
};
