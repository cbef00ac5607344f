use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ResourceType;

/// Caller-supplied pagination knobs. Both fields absent means "no pagination requested".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl PaginationOptions {
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.page_size.is_some() || self.page_token.is_some()
    }
}

/// One page of a (possibly filtered) collection.
///
/// `next_page_token` is present iff `end_index < total`; `previous_page_token` is present iff
/// `start_index > 0`. Tokens are stringified offsets into the same filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page_token: Option<String>,
    pub start_index: usize,
    pub end_index: usize,
    pub invalid_token: bool,
    pub total: usize,
}

/// A page plus the request-type filter that was actually applied to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResult<T> {
    #[serde(flatten)]
    pub page: PaginationResult<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_request_type: Option<Vec<ResourceType>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn options_without_fields_request_nothing() {
        let options: PaginationOptions = serde_json::from_value(json!({})).expect("options");
        assert!(!options.is_requested());

        let options: PaginationOptions =
            serde_json::from_value(json!({ "pageToken": "10" })).expect("options");
        assert!(options.is_requested());
    }

    #[test]
    fn listing_serializes_flat_camel_case() {
        let listing = ListingResult {
            page: PaginationResult {
                items: vec!["a", "b"],
                next_page_token: Some("2".to_string()),
                previous_page_token: None,
                start_index: 0,
                end_index: 2,
                invalid_token: false,
                total: 3,
            },
            applied_request_type: Some(vec![ResourceType::Xhr]),
        };
        assert_eq!(
            serde_json::to_value(&listing).expect("json"),
            json!({
                "items": ["a", "b"],
                "nextPageToken": "2",
                "startIndex": 0,
                "endIndex": 2,
                "invalidToken": false,
                "total": 3,
                "appliedRequestType": ["xhr"]
            })
        );
    }
}
