//! Flatten LinkML schema elements into browsable records.

use std::path::Path;

use indexmap::IndexSet;
use serde_json::{Value, json};
use tracing::info;

use super::model::CommonMetadata;
use super::view::SchemaView;
use crate::error::Result;
use crate::input::Record;

/// Element kind recorded in the `type` field.
pub const SLOT_DEFINITION: &str = "slot_definition";
pub const CLASS_DEFINITION: &str = "class_definition";
pub const ENUM_DEFINITION: &str = "enum_definition";

/// Load and merge LinkML schema files, then flatten their elements.
pub fn extract_linkml_elements(paths: &[impl AsRef<Path>]) -> Result<Vec<Record>> {
    let view = SchemaView::load_all(paths)?;
    let records = extract_elements(&view)?;
    info!(elements = records.len(), "extracted LinkML elements");
    Ok(records)
}

/// One record per slot, class and enum, in that order.
///
/// Optional keys are only present when their value is truthy: a non-empty
/// string or list, `true`, or a non-zero number.
pub fn extract_elements(view: &SchemaView) -> Result<Vec<Record>> {
    let slot_to_classes = view.slot_to_classes()?;
    let enum_to_slots = view.enum_to_slots();
    let mut records = Vec::new();

    for (name, slot) in view.all_slots() {
        let mut record = element(name, SLOT_DEFINITION);
        add_if_present(&mut record, "title", json!(slot.common.title));
        add_if_present(&mut record, "description", json!(slot.common.description));
        add_if_present(&mut record, "range", json!(slot.range));
        add_if_present(&mut record, "required", json!(slot.required));
        add_if_present(&mut record, "multivalued", json!(slot.multivalued));
        add_if_present(&mut record, "in_subset", json!(slot.common.in_subset));
        add_uris(&mut record, view, name, slot.slot_uri.as_deref());
        add_if_present(&mut record, "classes", json!(slot_to_classes.get(name)));
        add_if_present(&mut record, "domain", json!(slot.domain));
        add_if_present(&mut record, "pattern", json!(slot.pattern));
        add_if_present(&mut record, "minimum_value", slot.minimum_value.clone().unwrap_or_default());
        add_if_present(&mut record, "maximum_value", slot.maximum_value.clone().unwrap_or_default());
        add_if_present(&mut record, "keywords", json!(slot.common.keywords));
        add_trailing_metadata(&mut record, &slot.common);
        records.push(record);
    }

    for (name, class) in view.all_classes() {
        let mut record = element(name, CLASS_DEFINITION);
        add_if_present(&mut record, "title", json!(class.common.title));
        add_if_present(&mut record, "description", json!(class.common.description));
        add_if_present(&mut record, "is_a", json!(class.is_a));
        add_if_present(&mut record, "mixins", json!(class.mixins));
        add_if_present(&mut record, "slots", json!(view.class_slots(name)?));
        add_uris(&mut record, view, name, class.class_uri.as_deref());
        add_if_present(&mut record, "abstract", json!(class.is_abstract));
        add_if_present(&mut record, "mixin", json!(class.mixin));
        add_trailing_metadata(&mut record, &class.common);
        records.push(record);
    }

    for (name, enum_def) in view.all_enums() {
        let mut record = element(name, ENUM_DEFINITION);
        add_if_present(&mut record, "title", json!(enum_def.common.title));
        add_if_present(&mut record, "description", json!(enum_def.common.description));
        add_uris(&mut record, view, name, enum_def.enum_uri.as_deref());

        let enum_slots = enum_to_slots.get(name).cloned().unwrap_or_default();
        let mut enum_classes: Vec<&String> = enum_slots
            .iter()
            .filter_map(|slot| slot_to_classes.get(slot))
            .flatten()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        enum_classes.sort();
        add_if_present(&mut record, "slots", json!(enum_slots));
        add_if_present(&mut record, "classes", json!(enum_classes));

        if !enum_def.permissible_values.is_empty() {
            let values: Vec<&String> = enum_def.permissible_values.keys().collect();
            record.insert("permissible_values".to_string(), json!(values));
        }
        add_trailing_metadata(&mut record, &enum_def.common);
        records.push(record);
    }

    Ok(records)
}

fn element(name: &str, kind: &str) -> Record {
    let mut record = Record::new();
    record.insert("name".to_string(), json!(name));
    record.insert("type".to_string(), json!(kind));
    record
}

fn add_uris(record: &mut Record, view: &SchemaView, name: &str, explicit: Option<&str>) {
    if let Some(uri) = view.element_uri(name, explicit) {
        let url = view.expand_curie(&uri);
        add_if_present(record, "uri", json!(uri));
        add_if_present(record, "url", json!(url));
    }
}

fn add_trailing_metadata(record: &mut Record, common: &CommonMetadata) {
    add_if_present(record, "deprecated", common.deprecated.clone().unwrap_or_default());
    add_if_present(record, "comments", json!(common.comments));
    add_if_present(record, "aliases", json!(common.aliases));
    add_if_present(record, "see_also", json!(common.see_also));
    add_if_present(record, "mappings", json!(common.mappings()));
}

fn add_if_present(record: &mut Record, key: &str, value: Value) {
    if is_truthy(&value) {
        record.insert(key.to_string(), value);
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
