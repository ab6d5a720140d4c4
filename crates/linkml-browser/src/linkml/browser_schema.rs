//! Fixed browser schema for extracted LinkML elements.

use once_cell::sync::Lazy;

use crate::schema::{DisplayFieldSpec, FacetSpec, FieldType, SchemaDescriptor};

/// The schema used when browsing LinkML elements.
pub static LINKML_BROWSER_SCHEMA: Lazy<SchemaDescriptor> = Lazy::new(|| {
    let facets = [
        ("type", "Element Type", FieldType::String),
        ("in_subset", "Subset", FieldType::Array),
        ("classes", "Used By Class", FieldType::Array),
        ("slots", "Used By Slot", FieldType::Array),
        ("range", "Range", FieldType::String),
        ("is_a", "Parent", FieldType::String),
        ("required", "Required", FieldType::String),
        ("multivalued", "Multivalued", FieldType::String),
        ("abstract", "Abstract", FieldType::String),
        ("mixin", "Mixin", FieldType::String),
        ("deprecated", "Deprecated", FieldType::String),
    ]
    .into_iter()
    .map(|(field, label, field_type)| FacetSpec::new(field, field_type).with_label(label))
    .collect();

    let display_fields = [
        ("name", "Name", FieldType::String),
        ("title", "Title", FieldType::String),
        ("description", "Description", FieldType::String),
        ("type", "Type", FieldType::String),
        ("range", "Range", FieldType::String),
        ("is_a", "Parent", FieldType::String),
        ("url", "URI", FieldType::Url),
        ("classes", "Used By", FieldType::Array),
        ("slots", "Slots", FieldType::Array),
        ("mixins", "Mixins", FieldType::Array),
        ("permissible_values", "Values", FieldType::Array),
        ("in_subset", "Subsets", FieldType::Array),
        ("aliases", "Aliases", FieldType::Array),
        ("keywords", "Keywords", FieldType::Array),
        ("mappings", "Mappings", FieldType::Array),
    ]
    .into_iter()
    .map(|(field, label, field_type)| DisplayFieldSpec::new(field, field_type).with_label(label))
    .collect();

    SchemaDescriptor {
        title: "Schema Browser".to_string(),
        description: "Browse LinkML schema elements".to_string(),
        search_placeholder: "Search elements...".to_string(),
        searchable_fields: [
            "name",
            "title",
            "description",
            "aliases",
            "comments",
            "keywords",
            "permissible_values",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        facets,
        display_fields,
        ..SchemaDescriptor::default()
    }
});

/// The LinkML browser schema with optional title and description overrides.
/// Empty overrides are ignored.
pub fn linkml_browser_schema(title: Option<&str>, description: Option<&str>) -> SchemaDescriptor {
    let mut schema = LINKML_BROWSER_SCHEMA.clone();
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        schema.title = title.to_string();
    }
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        schema.description = description.to_string();
    }
    schema
}
