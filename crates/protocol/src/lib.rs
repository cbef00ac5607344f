use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod pagination;
pub mod request_type;

pub use pagination::{ListingResult, PaginationOptions, PaginationResult};
pub use request_type::RequestTypeFilter;

/// Resource categories a captured request can be filtered by.
///
/// The declaration order is the canonical allow-list order. Every surface that validates or
/// advertises request types (filter, tool schema, CLI) reads [`ResourceType::ALL`].
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Document,
    Stylesheet,
    Image,
    Media,
    Font,
    Script,
    TextTrack,
    Xhr,
    Fetch,
    Prefetch,
    EventSource,
    WebSocket,
    Manifest,
    SignedExchange,
    Ping,
    CspViolationReport,
    Preflight,
    FedCm,
    Other,
}

impl ResourceType {
    pub const ALL: [ResourceType; 19] = [
        ResourceType::Document,
        ResourceType::Stylesheet,
        ResourceType::Image,
        ResourceType::Media,
        ResourceType::Font,
        ResourceType::Script,
        ResourceType::TextTrack,
        ResourceType::Xhr,
        ResourceType::Fetch,
        ResourceType::Prefetch,
        ResourceType::EventSource,
        ResourceType::WebSocket,
        ResourceType::Manifest,
        ResourceType::SignedExchange,
        ResourceType::Ping,
        ResourceType::CspViolationReport,
        ResourceType::Preflight,
        ResourceType::FedCm,
        ResourceType::Other,
    ];

    /// Wire spelling (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceType::Document => "document",
            ResourceType::Stylesheet => "stylesheet",
            ResourceType::Image => "image",
            ResourceType::Media => "media",
            ResourceType::Font => "font",
            ResourceType::Script => "script",
            ResourceType::TextTrack => "texttrack",
            ResourceType::Xhr => "xhr",
            ResourceType::Fetch => "fetch",
            ResourceType::Prefetch => "prefetch",
            ResourceType::EventSource => "eventsource",
            ResourceType::WebSocket => "websocket",
            ResourceType::Manifest => "manifest",
            ResourceType::SignedExchange => "signedexchange",
            ResourceType::Ping => "ping",
            ResourceType::CspViolationReport => "cspviolationreport",
            ResourceType::Preflight => "preflight",
            ResourceType::FedCm => "fedcm",
            ResourceType::Other => "other",
        }
    }

    /// Exact, case-sensitive lookup in the allow-list.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == raw)
    }

    pub fn wire_names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::as_str)
    }
}

/// Machine-readable companion of a tool error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde_representation() {
        for ty in ResourceType::ALL {
            let json = serde_json::to_string(&ty).expect("serialize resource type");
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            let back: ResourceType = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn parse_is_exact_and_rejects_unknown_values() {
        assert_eq!(ResourceType::parse("xhr"), Some(ResourceType::Xhr));
        assert_eq!(
            ResourceType::parse("cspviolationreport"),
            Some(ResourceType::CspViolationReport)
        );
        assert_eq!(ResourceType::parse("XHR"), None);
        assert_eq!(ResourceType::parse(" xhr"), None);
        assert_eq!(ResourceType::parse("beacon"), None);
        assert_eq!(ResourceType::parse(""), None);
    }

    #[test]
    fn allow_list_order_is_declaration_order() {
        let mut sorted = ResourceType::ALL;
        sorted.sort();
        assert_eq!(sorted, ResourceType::ALL);
    }
}
