use netpage_protocol::{PaginationOptions, PaginationResult};

/// Page size used when the caller asks for pagination but the size is unusable.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Environment override for [`PaginationConfig::default_page_size`].
pub const DEFAULT_PAGE_SIZE_ENV: &str = "NETPAGE_DEFAULT_PAGE_SIZE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
}

impl PaginationConfig {
    /// A zero default would make empty pages possible; it is bumped to 1.
    #[must_use]
    pub fn with_default_page_size(default_page_size: usize) -> Self {
        Self {
            default_page_size: default_page_size.max(1),
        }
    }

    pub fn from_env() -> Self {
        Self::from_override(std::env::var(DEFAULT_PAGE_SIZE_ENV).ok().as_deref())
    }

    /// Unset or blank keeps the built-in default; anything that is not a positive integer is
    /// reported and ignored.
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        match raw.parse::<usize>() {
            Ok(size) if size > 0 => Self::with_default_page_size(size),
            _ => {
                log::warn!(
                    "Invalid {DEFAULT_PAGE_SIZE_ENV}={raw:?}; falling back to {DEFAULT_PAGE_SIZE}"
                );
                Self::default()
            }
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn resolve_page_size(requested: Option<i64>, total: usize, config: &PaginationConfig) -> usize {
    let size = match requested {
        None if total > 0 => total,
        None => config.default_page_size,
        Some(size) if size > 0 => usize::try_from(size).unwrap_or(usize::MAX),
        Some(_) => config.default_page_size,
    };
    size.clamp(1, total.max(1))
}

/// Start offset and whether a supplied token had to be discarded.
fn resolve_start(token: Option<&str>, total: usize) -> (usize, bool) {
    let Some(token) = token else {
        return (0, false);
    };
    match token.trim().parse::<i64>() {
        Ok(offset) if offset >= 0 => match usize::try_from(offset) {
            Ok(offset) if offset < total => (offset, false),
            _ => (0, true),
        },
        _ => (0, true),
    }
}

/// Cut one page out of `records`.
///
/// Never fails: unusable sizes fall back to the configured default and unusable tokens restart
/// at the first page with `invalid_token` set.
pub fn paginate<T: Clone>(
    records: &[T],
    options: &PaginationOptions,
    config: &PaginationConfig,
) -> PaginationResult<T> {
    let total = records.len();

    if !options.is_requested() {
        return PaginationResult {
            items: records.to_vec(),
            next_page_token: None,
            previous_page_token: None,
            start_index: 0,
            end_index: total,
            invalid_token: false,
            total,
        };
    }

    let page_size = resolve_page_size(options.page_size, total, config);
    let (start_index, invalid_token) = resolve_start(options.page_token.as_deref(), total);
    if invalid_token {
        log::debug!(
            "discarding page token {:?} (total={total}); restarting at first page",
            options.page_token
        );
    }

    let end_index = start_index.saturating_add(page_size).min(total);
    let items = records[start_index..end_index].to_vec();

    let next_page_token = (end_index < total).then(|| end_index.to_string());
    let previous_page_token =
        (start_index > 0).then(|| start_index.saturating_sub(page_size).to_string());

    PaginationResult {
        items,
        next_page_token,
        previous_page_token,
        start_index,
        end_index,
        invalid_token,
        total,
    }
}
