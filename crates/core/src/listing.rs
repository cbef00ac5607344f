use netpage_protocol::{ListingResult, PaginationOptions, RequestTypeFilter};

use crate::filter::{filter, Categorized, CategoryFilter};
use crate::paginate::{paginate, PaginationConfig};

/// Everything a listing call accepts: pagination knobs plus an optional type filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub pagination: PaginationOptions,
    pub request_type: Option<RequestTypeFilter>,
}

impl ListingOptions {
    #[must_use]
    pub fn new(pagination: PaginationOptions, request_type: Option<RequestTypeFilter>) -> Self {
        Self {
            pagination,
            request_type,
        }
    }
}

/// Filter-then-paginate over a snapshot owned by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingService {
    config: PaginationConfig,
}

impl ListingService {
    #[must_use]
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// `total` and every offset in the result refer to the filtered view, not to `records`.
    pub fn list<'a, T: Categorized>(
        &self,
        records: &'a [T],
        options: &ListingOptions,
    ) -> ListingResult<&'a T> {
        let category_filter = CategoryFilter::from_request(options.request_type.as_ref());
        let filtered = filter(records, &category_filter);
        let page = paginate(&filtered, &options.pagination, &self.config);

        log::debug!(
            "listed {}..{} of {} (raw={}, filter={:?}, invalid_token={})",
            page.start_index,
            page.end_index,
            page.total,
            records.len(),
            category_filter.applied(),
            page.invalid_token
        );

        let applied_request_type = category_filter
            .is_active()
            .then(|| category_filter.applied().to_vec());

        ListingResult {
            page,
            applied_request_type,
        }
    }
}
