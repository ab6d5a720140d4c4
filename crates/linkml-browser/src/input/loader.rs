//! Loading record collections from JSON files.

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::source::{Record, SourceMetadata};
use crate::error::{BrowserError, Result};

/// Load a JSON file whose top-level value is an array of objects.
///
/// # Example
///
/// ```no_run
/// let records = linkml_browser::load_json_data("books.json").unwrap();
/// println!("{} records", records.len());
/// ```
pub fn load_json_data(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    load_json_data_with_metadata(path).map(|(records, _)| records)
}

/// Load records and describe the file they came from.
pub fn load_json_data_with_metadata(
    path: impl AsRef<Path>,
) -> Result<(Vec<Record>, SourceMetadata)> {
    let path = path.as_ref();

    let contents = fs::read(path).map_err(|e| BrowserError::io(path, e))?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());

    let value: Value = serde_json::from_slice(&contents).map_err(|e| {
        BrowserError::invalid_format(path, format!("not valid JSON: {}", e))
    })?;
    let records = records_from_value(value, path)?;

    let field_count = records
        .iter()
        .flat_map(|r| r.keys())
        .collect::<IndexSet<_>>()
        .len();

    let metadata = SourceMetadata::new(
        path.to_path_buf(),
        hash,
        contents.len() as u64,
        records.len(),
        field_count,
    );

    Ok((records, metadata))
}

/// Convert a parsed JSON value into records, checking its shape.
///
/// `origin` is only used for error messages.
pub fn records_from_value(value: Value, origin: &Path) -> Result<Vec<Record>> {
    let Value::Array(items) = value else {
        return Err(BrowserError::invalid_format(
            origin,
            "Data must be a JSON array of objects",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(BrowserError::invalid_format(
                origin,
                format!("item {} is {}, expected an object", index, kind_name(&other)),
            )),
        })
        .collect()
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
