use netpage_protocol::{RequestTypeFilter, ResourceType};

/// A record that carries a categorical attribute.
///
/// The value is whatever the producer reported; it does not have to be allow-listed.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

/// Normalized request-type filter. Empty means "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    allowed: Vec<ResourceType>,
}

impl CategoryFilter {
    #[must_use]
    pub fn from_request(requested: Option<&RequestTypeFilter>) -> Self {
        Self {
            allowed: requested.map(RequestTypeFilter::normalize).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// The allow-listed types this filter keeps, in request order.
    #[must_use]
    pub fn applied(&self) -> &[ResourceType] {
        &self.allowed
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        ResourceType::parse(category).is_some_and(|ty| self.allowed.contains(&ty))
    }
}

/// Keep records whose category passes `filter`, preserving order.
pub fn filter<'a, T: Categorized>(records: &'a [T], filter: &CategoryFilter) -> Vec<&'a T> {
    if !filter.is_active() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| filter.matches(record.category()))
        .collect()
}
