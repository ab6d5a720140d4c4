//! Record representation and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One browsable unit of data: field name to JSON value, in source order.
pub type Record = IndexMap<String, Value>;

/// Profiling view of a record value.
///
/// Only text, numbers and sequences take part in schema inference; booleans,
/// nulls and nested objects are carried through to the data artifact untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind<'a> {
    Text(&'a str),
    Number(&'a Number),
    Sequence(&'a [Value]),
    Other,
}

impl<'a> ValueKind<'a> {
    /// Classify a JSON value.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(s) => ValueKind::Text(s),
            Value::Number(n) => ValueKind::Number(n),
            Value::Array(items) => ValueKind::Sequence(items),
            Value::Bool(_) | Value::Null | Value::Object(_) => ValueKind::Other,
        }
    }

    /// Stringified form of a scalar, `None` for anything that is not text or a number.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            ValueKind::Text(s) => Some((*s).to_string()),
            ValueKind::Number(n) => Some(n.to_string()),
            ValueKind::Sequence(_) | ValueKind::Other => None,
        }
    }
}

/// Metadata about a loaded record file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of records.
    pub record_count: usize,
    /// Number of distinct field names across all records.
    pub field_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        record_count: usize,
        field_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            record_count,
            field_count,
            loaded_at: Utc::now(),
        }
    }
}
