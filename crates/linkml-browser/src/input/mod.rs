//! Record sources: JSON files and their metadata.

mod loader;
mod source;

pub use loader::{load_json_data, load_json_data_with_metadata, records_from_value};
pub use source::{Record, SourceMetadata, ValueKind};
