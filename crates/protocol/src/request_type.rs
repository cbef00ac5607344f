use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::ResourceType;

/// Requested resource types: a single value or a list of values.
///
/// Values are kept as raw strings on the wire so that unrecognized entries degrade to "dropped"
/// during normalization instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestTypeFilter {
    One(String),
    Many(Vec<String>),
}

impl RequestTypeFilter {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            RequestTypeFilter::One(value) => std::slice::from_ref(value),
            RequestTypeFilter::Many(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    /// Allow-listed values in first-seen order, without duplicates.
    #[must_use]
    pub fn normalize(&self) -> Vec<ResourceType> {
        let mut out: Vec<ResourceType> = Vec::new();
        for ty in self.values().filter_map(ResourceType::parse) {
            if !out.contains(&ty) {
                out.push(ty);
            }
        }
        out
    }
}

impl JsonSchema for RequestTypeFilter {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RequestTypeFilter")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let names: Vec<&'static str> = ResourceType::wire_names().collect();
        json_schema!({
            "description": "Resource type, or list of resource types, to keep.",
            "anyOf": [
                { "type": "string", "enum": names.clone() },
                {
                    "type": "array",
                    "items": { "type": "string", "enum": names }
                }
            ]
        })
    }
}
