//! LinkML schema browsing: parse schema YAML, flatten its elements into
//! records and pair them with a fixed browser schema.

mod browser_schema;
mod extract;
mod model;
mod view;

pub use browser_schema::{LINKML_BROWSER_SCHEMA, linkml_browser_schema};
pub use extract::{
    CLASS_DEFINITION, ENUM_DEFINITION, SLOT_DEFINITION, extract_elements,
    extract_linkml_elements,
};
pub use model::{
    ClassDefinition, CommonMetadata, EnumDefinition, Prefix, SchemaDefinition, SlotDefinition,
};
pub use view::SchemaView;
