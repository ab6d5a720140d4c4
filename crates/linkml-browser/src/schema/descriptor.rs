//! The schema descriptor that drives the browser.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{FieldType, SortBy};
use crate::error::{BrowserError, Result};

/// Default browser title.
pub const DEFAULT_TITLE: &str = "Data Browser";
/// Default browser description.
pub const DEFAULT_DESCRIPTION: &str = "Browse and filter data";
/// Default search box placeholder.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// A filterable axis in the browser sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSpec {
    pub field: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortBy,
    /// Viewer options not modelled here.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl FacetSpec {
    /// Create a facet labelled from its field name, sorted by count.
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        let field = field.into();
        Self {
            label: field_label(&field),
            field,
            field_type,
            sort_by: SortBy::Count,
            extra: IndexMap::new(),
        }
    }

    /// Override the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Override the sort order.
    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// A field shown on each result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFieldSpec {
    pub field: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl DisplayFieldSpec {
    /// Create a display field labelled from its field name.
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        let field = field.into();
        Self {
            label: field_label(&field),
            field,
            field_type,
            extra: IndexMap::new(),
        }
    }

    /// Override the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Configuration for the faceted browser: what to search, filter and show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaDescriptor {
    pub title: String,
    pub description: String,
    pub search_placeholder: String,
    pub searchable_fields: Vec<String>,
    pub facets: Vec<FacetSpec>,
    pub display_fields: Vec<DisplayFieldSpec>,
    /// Top-level keys of hand-written schemas (e.g. `itemsPerPage`).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for SchemaDescriptor {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            searchable_fields: Vec::new(),
            facets: Vec::new(),
            display_fields: Vec::new(),
            extra: IndexMap::new(),
        }
    }
}

impl SchemaDescriptor {
    /// Find a facet by field name.
    pub fn facet(&self, field: &str) -> Option<&FacetSpec> {
        self.facets.iter().find(|f| f.field == field)
    }

    /// Find a display field by field name.
    pub fn display_field(&self, field: &str) -> Option<&DisplayFieldSpec> {
        self.display_fields.iter().find(|f| f.field == field)
    }

    /// Whether a field is included in free-text search.
    pub fn is_searchable(&self, field: &str) -> bool {
        self.searchable_fields.iter().any(|f| f == field)
    }

    /// Load a schema from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| BrowserError::io(path, e))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            BrowserError::invalid_format(path, format!("Invalid schema JSON: {}", e))
        })
    }

    /// Save the schema as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| BrowserError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| BrowserError::io(path, e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;

        Ok(())
    }
}

/// Load a schema descriptor from a JSON file.
pub fn load_schema(path: impl AsRef<Path>) -> Result<SchemaDescriptor> {
    SchemaDescriptor::load(path)
}

/// Save a schema descriptor to a JSON file.
pub fn save_schema(schema: &SchemaDescriptor, path: impl AsRef<Path>) -> Result<()> {
    schema.save(path)
}

/// Human label for a field name: underscores become spaces, words are title-cased.
///
/// A letter is upper-cased when it follows a non-letter and lower-cased
/// otherwise, so `publication_year` becomes `Publication Year` and `taxonID`
/// becomes `Taxonid`.
pub fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len());
    let mut after_letter = false;

    for ch in field.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if after_letter {
                label.extend(ch.to_lowercase());
            } else {
                label.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            label.push(ch);
            after_letter = false;
        }
    }

    label
}
