//! linkml-browser: standalone faceted browsers for JSON records.
//!
//! Given a list of untyped records, the crate infers which fields are worth
//! searching, which make good filter facets and which to show on each result,
//! then writes a static browser folder (`index.html`, `data.js`, `schema.js`)
//! that works from the filesystem without a server.
//!
//! # Core Principles
//!
//! - **Sample, don't scan**: facet decisions come from a bounded prefix of the data
//! - **Deterministic**: the same input always produces byte-identical artifacts
//! - **Schema-optional**: a hand-written schema always wins over inference
//!
//! # Example
//!
//! ```no_run
//! use linkml_browser::{BrowserGenerator, load_json_data};
//!
//! let records = load_json_data("books.json").unwrap();
//! let generator = BrowserGenerator::new(records).unwrap();
//! let summary = generator.generate("books-browser", false).unwrap();
//!
//! println!("Facets: {}", generator.schema().facets.len());
//! println!("Files: {:?}", summary.files);
//! ```

pub mod error;
pub mod gallery;
pub mod inference;
pub mod input;
pub mod linkml;
pub mod output;
pub mod schema;

mod browser;

pub use crate::browser::{BrowserGenerator, GenerationSummary};
pub use error::{ArtifactIssue, BrowserError, Result};
pub use gallery::{FilterConfig, GalleryReport, filter_records, validate_gallery};
pub use inference::{InferenceConfig, SchemaInference, infer_schema};
pub use input::{Record, SourceMetadata, load_json_data, load_json_data_with_metadata};
pub use linkml::{extract_linkml_elements, linkml_browser_schema};
pub use schema::{
    DisplayFieldSpec, FacetSpec, FieldType, SchemaDescriptor, SortBy, load_schema, save_schema,
};
