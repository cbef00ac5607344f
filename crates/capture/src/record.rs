use netpage_core::Categorized;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One request observed during a browsing session.
///
/// `resource_type` is stored as reported by the driver; it may fall outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRequest {
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub request_headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub response_headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_resource_type() -> String {
    "other".to_string()
}

impl NetworkRequest {
    pub fn new(url: impl Into<String>, method: impl Into<String>, resource_type: &str) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            resource_type: resource_type.to_string(),
            status: None,
            failure: None,
            request_headers: BTreeMap::new(),
            response_headers: BTreeMap::new(),
            duration_ms: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_failure(mut self, failure: impl Into<String>) -> Self {
        self.failure = Some(failure.into());
        self
    }

    /// A response status wins over a failure text.
    #[must_use]
    pub fn state(&self) -> RequestStatus {
        match (self.status, self.failure.as_deref()) {
            (Some(code), _) if (200..=299).contains(&code) => RequestStatus::Success(code),
            (Some(code), _) => RequestStatus::Failed(code),
            (None, Some(text)) => RequestStatus::Errored(text.to_string()),
            (None, None) => RequestStatus::Pending,
        }
    }
}

impl Categorized for NetworkRequest {
    fn category(&self) -> &str {
        &self.resource_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Success(u16),
    Failed(u16),
    Errored(String),
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => f.write_str("[pending]"),
            RequestStatus::Success(code) => write!(f, "[success - {code}]"),
            RequestStatus::Failed(code) => write!(f, "[failed - {code}]"),
            RequestStatus::Errored(text) => write!(f, "[failed - {text}]"),
        }
    }
}

/// First request whose URL matches exactly.
pub fn find_by_url<'a>(records: &'a [NetworkRequest], url: &str) -> Option<&'a NetworkRequest> {
    records.iter().find(|record| record.url == url)
}
