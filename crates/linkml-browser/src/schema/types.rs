//! Core type definitions for the browser schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field's values are interpreted by the viewer.
///
/// Inference only ever produces `String`, `Array` and `Integer`. Hand-written
/// schemas use further names (`url`, `curie`, `boolean`, ...) which are kept
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Single text value.
    #[default]
    String,
    /// Multi-valued field; each member is a separate facet value.
    Array,
    /// Whole numbers, filtered as a range.
    Integer,
    /// Rendered as a link.
    Url,
    /// Any other viewer-specific type name.
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Array => "array",
            FieldType::Integer => "integer",
            FieldType::Url => "url",
            FieldType::Other(name) => name,
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => FieldType::String,
            "array" => FieldType::Array,
            "integer" => FieldType::Integer,
            "url" => FieldType::Url,
            _ => FieldType::Other(value),
        }
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of facet values in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most frequent values first.
    Count,
    /// Values in alphabetical order.
    Alphabetical,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Count
    }
}
