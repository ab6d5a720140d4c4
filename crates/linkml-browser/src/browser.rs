//! Browser generator: records plus schema in, static browser folder out.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BrowserError, Result};
use crate::inference::SchemaInference;
use crate::input::Record;
use crate::output::{
    DATA_JS, DATA_VARIABLE, INDEX_HTML, SCHEMA_JS, SCHEMA_VARIABLE, index_html, render_script,
};
use crate::schema::SchemaDescriptor;

/// What a call to [`BrowserGenerator::generate`] wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Records written to the data artifact.
    pub record_count: usize,
    /// Facets in the schema artifact.
    pub facet_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Generates standalone faceted browsers for JSON records.
#[derive(Debug, Clone)]
pub struct BrowserGenerator {
    records: Vec<Record>,
    schema: SchemaDescriptor,
}

impl BrowserGenerator {
    /// Create a generator, inferring the schema from the records.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let schema = SchemaInference::new().infer(&records)?;
        Ok(Self { records, schema })
    }

    /// Create a generator with an explicit schema; nothing is inferred.
    pub fn with_schema(records: Vec<Record>, schema: SchemaDescriptor) -> Self {
        Self { records, schema }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    /// Contents of `data.js`.
    pub fn data_script(&self) -> Result<String> {
        render_script(DATA_VARIABLE, &self.records)
    }

    /// Contents of `schema.js`.
    pub fn schema_script(&self) -> Result<String> {
        render_script(SCHEMA_VARIABLE, &self.schema)
    }

    /// The three artifacts as file name and bytes, in write order.
    fn render_artifacts(&self) -> Result<Vec<(&'static str, Vec<u8>)>> {
        Ok(vec![
            (INDEX_HTML, index_html()?.into_owned()),
            (DATA_JS, self.data_script()?.into_bytes()),
            (SCHEMA_JS, self.schema_script()?.into_bytes()),
        ])
    }

    /// Write `index.html`, `data.js` and `schema.js` into `output_dir`.
    ///
    /// An existing directory is an error unless `force` is set, in which case
    /// it is removed first. Nothing on disk changes if rendering fails.
    pub fn generate(&self, output_dir: impl AsRef<Path>, force: bool) -> Result<GenerationSummary> {
        let output_dir = output_dir.as_ref();

        let artifacts = self.render_artifacts()?;

        if output_dir.exists() {
            if !force {
                return Err(BrowserError::OutputExists(output_dir.to_path_buf()));
            }
            fs::remove_dir_all(output_dir).map_err(|e| BrowserError::io(output_dir, e))?;
        }
        fs::create_dir_all(output_dir).map_err(|e| BrowserError::io(output_dir, e))?;

        for (name, contents) in &artifacts {
            write_file(&output_dir.join(name), contents)?;
        }

        info!(
            dir = %output_dir.display(),
            records = self.records.len(),
            facets = self.schema.facets.len(),
            "generated browser"
        );

        Ok(GenerationSummary {
            record_count: self.records.len(),
            facet_count: self.schema.facets.len(),
            files: artifacts.iter().map(|(name, _)| name.to_string()).collect(),
        })
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| BrowserError::io(path, e))
}
