//! Schema inference: turn untyped records into a browser configuration.

use tracing::debug;

use super::profile::FieldProfiles;
use crate::error::{BrowserError, Result};
use crate::input::Record;
use crate::schema::{
    DEFAULT_DESCRIPTION, DEFAULT_SEARCH_PLACEHOLDER, DEFAULT_TITLE, DisplayFieldSpec, FacetSpec,
    SchemaDescriptor,
};

/// Number of leading records inspected for types and cardinality.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Fields with this many distinct sampled values or more are treated as identifiers.
pub const DEFAULT_MAX_DISTINCT_VALUES: usize = 100;

/// Configuration for schema inference.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Records profiled, counted from the start of the input.
    pub sample_size: usize,
    /// Exclusive upper bound on distinct values for a facet.
    pub max_distinct_values: usize,
    /// Browser title.
    pub title: String,
    /// Browser description.
    pub description: String,
    /// Search box placeholder.
    pub search_placeholder: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            max_distinct_values: DEFAULT_MAX_DISTINCT_VALUES,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

/// Infers a [`SchemaDescriptor`] from a sample of records.
#[derive(Debug, Clone, Default)]
pub struct SchemaInference {
    config: InferenceConfig,
}

impl SchemaInference {
    /// Create an inference engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inference engine with custom configuration.
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Set the browser title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the browser description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer searchable fields, facets and display fields.
    ///
    /// Field membership is taken from every record, but types and
    /// cardinalities only from the first `sample_size` records: a field that
    /// first appears after the sample is displayed but never faceted.
    pub fn infer(&self, records: &[Record]) -> Result<SchemaDescriptor> {
        if records.is_empty() {
            return Err(BrowserError::EmptyInput);
        }

        let sample_size = self.config.sample_size.min(records.len());
        let profiles = FieldProfiles::build(records, sample_size);
        debug!(
            records = records.len(),
            sample_size,
            fields = profiles.len(),
            "profiled records"
        );

        let mut searchable_fields: Vec<String> = profiles
            .iter()
            .filter(|(_, p)| p.is_textual())
            .map(|(field, _)| field.to_string())
            .collect();
        if searchable_fields.is_empty() {
            debug!("no textual fields, searching every field");
            searchable_fields = profiles.fields().map(str::to_string).collect();
        }

        let mut facets = Vec::new();
        for (field, profile) in profiles.iter() {
            let distinct = profile.cardinality();
            if distinct > 1 && distinct < self.config.max_distinct_values {
                let facet = FacetSpec::new(field, profile.facet_type());
                debug!(field, distinct, facet_type = %facet.field_type, "facet");
                facets.push(facet);
            } else {
                debug!(field, distinct, "not a facet");
            }
        }

        let mut display_fields: Vec<DisplayFieldSpec> = profiles
            .iter()
            .map(|(field, profile)| DisplayFieldSpec::new(field, profile.base_type()))
            .collect();
        display_fields.sort_by(|a, b| a.field.cmp(&b.field));

        Ok(SchemaDescriptor {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            search_placeholder: self.config.search_placeholder.clone(),
            searchable_fields,
            facets,
            display_fields,
            ..SchemaDescriptor::default()
        })
    }
}

/// Infer a schema with the default sample size and thresholds.
///
/// # Example
///
/// ```
/// use linkml_browser::{infer_schema, Record};
/// use serde_json::json;
///
/// let records: Vec<Record> = serde_json::from_value(json!([
///     {"title": "Emma", "year": 1815},
///     {"title": "Persuasion", "year": 1817},
/// ])).unwrap();
///
/// let schema = infer_schema(&records, None, None).unwrap();
/// assert!(schema.is_searchable("title"));
/// ```
pub fn infer_schema(
    records: &[Record],
    title: Option<&str>,
    description: Option<&str>,
) -> Result<SchemaDescriptor> {
    let mut inference = SchemaInference::new();
    if let Some(title) = title {
        inference = inference.with_title(title);
    }
    if let Some(description) = description {
        inference = inference.with_description(description);
    }
    inference.infer(records)
}
