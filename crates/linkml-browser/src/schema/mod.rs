//! Schema descriptor types consumed by the browser shell.

mod descriptor;
mod types;

pub use descriptor::{
    DEFAULT_DESCRIPTION, DEFAULT_SEARCH_PLACEHOLDER, DEFAULT_TITLE, DisplayFieldSpec, FacetSpec,
    SchemaDescriptor, field_label, load_schema, save_schema,
};
pub use types::{FieldType, SortBy};
