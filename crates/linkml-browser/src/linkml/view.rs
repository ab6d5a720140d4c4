//! Merged, queryable view over one or more LinkML schema files.

use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::model::{ClassDefinition, EnumDefinition, SchemaDefinition, SlotDefinition};
use crate::error::{BrowserError, Result};

static CURIE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_.-]*):(.*)$").expect("valid CURIE pattern"));

/// A schema with its imports-free merge applied.
#[derive(Debug, Clone)]
pub struct SchemaView {
    schema: SchemaDefinition,
}

impl SchemaView {
    /// Wrap an already parsed schema.
    pub fn new(schema: SchemaDefinition) -> Self {
        Self { schema }
    }

    /// Parse a schema from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(Self::new(serde_yaml::from_str(text)?))
    }

    /// Load a schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| BrowserError::io(path, e))?;
        let schema = serde_yaml::from_str(&text).map_err(|e| {
            BrowserError::invalid_format(path, format!("Invalid LinkML YAML: {}", e))
        })?;
        Ok(Self::new(schema))
    }

    /// Load the first schema and merge every following one into it.
    pub fn load_all(paths: &[impl AsRef<Path>]) -> Result<Self> {
        let Some((first, rest)) = paths.split_first() else {
            return Err(BrowserError::Config("No LinkML schema files given".to_string()));
        };

        let mut view = Self::load(first)?;
        for path in rest {
            let other = Self::load(path)?;
            view.merge(other.schema);
        }
        Ok(view)
    }

    /// Add elements and prefixes from `other` that this schema does not define.
    pub fn merge(&mut self, other: SchemaDefinition) {
        for (name, prefix) in other.prefixes {
            self.schema.prefixes.entry(name).or_insert(prefix);
        }
        for (name, slot) in other.slots {
            self.schema.slots.entry(name).or_insert(slot);
        }
        for (name, class) in other.classes {
            self.schema.classes.entry(name).or_insert(class);
        }
        for (name, enum_def) in other.enums {
            self.schema.enums.entry(name).or_insert(enum_def);
        }
    }

    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    pub fn all_classes(&self) -> &IndexMap<String, ClassDefinition> {
        &self.schema.classes
    }

    pub fn all_enums(&self) -> &IndexMap<String, EnumDefinition> {
        &self.schema.enums
    }

    /// Top-level slots followed by class attributes not defined at top level.
    pub fn all_slots(&self) -> IndexMap<&str, &SlotDefinition> {
        let mut slots: IndexMap<&str, &SlotDefinition> = self
            .schema
            .slots
            .iter()
            .map(|(name, slot)| (name.as_str(), slot))
            .collect();
        for class in self.schema.classes.values() {
            for (name, slot) in &class.attributes {
                slots.entry(name.as_str()).or_insert(slot);
            }
        }
        slots
    }

    /// Slots a class has: its own slots and attributes, then those inherited
    /// through `is_a` and mixins. Each slot is listed once.
    pub fn class_slots(&self, class_name: &str) -> Result<Vec<String>> {
        let mut slots = IndexSet::new();
        let mut visited = IndexSet::new();
        self.collect_class_slots(class_name, &mut slots, &mut visited)?;
        Ok(slots.into_iter().collect())
    }

    fn collect_class_slots(
        &self,
        class_name: &str,
        slots: &mut IndexSet<String>,
        visited: &mut IndexSet<String>,
    ) -> Result<()> {
        if !visited.insert(class_name.to_string()) {
            return Ok(());
        }
        let class = self.schema.classes.get(class_name).ok_or_else(|| {
            BrowserError::Linkml(format!("Unknown class '{}'", class_name))
        })?;

        slots.extend(class.slots.iter().cloned());
        slots.extend(class.attributes.keys().cloned());

        if let Some(parent) = &class.is_a {
            self.collect_class_slots(parent, slots, visited)?;
        }
        for mixin in &class.mixins {
            self.collect_class_slots(mixin, slots, visited)?;
        }
        Ok(())
    }

    /// Slot name to the classes that use it, in class order.
    pub fn slot_to_classes(&self) -> Result<IndexMap<String, Vec<String>>> {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        for class_name in self.schema.classes.keys() {
            for slot in self.class_slots(class_name)? {
                map.entry(slot).or_default().push(class_name.clone());
            }
        }
        debug!(slots = map.len(), "built slot usage map");
        Ok(map)
    }

    /// Enum name to the slots whose range is that enum.
    pub fn enum_to_slots(&self) -> IndexMap<String, Vec<String>> {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        for (slot_name, slot) in self.all_slots() {
            if let Some(range) = &slot.range {
                if self.schema.enums.contains_key(range) {
                    map.entry(range.clone()).or_default().push(slot_name.to_string());
                }
            }
        }
        map
    }

    /// The element's URI as written: the explicit URI, else a CURIE in the
    /// default prefix, else the schema id joined with the name.
    pub fn element_uri(&self, name: &str, explicit: Option<&str>) -> Option<String> {
        if let Some(uri) = explicit.filter(|u| !u.is_empty()) {
            return Some(uri.to_string());
        }
        if let Some(prefix) = self.schema.default_prefix.as_deref() {
            return Some(format!("{}:{}", prefix, name));
        }
        self.schema.id.as_deref().map(|id| {
            if id.ends_with('/') || id.ends_with('#') {
                format!("{}{}", id, name)
            } else {
                format!("{}/{}", id, name)
            }
        })
    }

    /// Expand a CURIE through the schema prefixes. Unknown prefixes and full
    /// URIs are returned unchanged.
    pub fn expand_curie(&self, uri: &str) -> String {
        let Some(caps) = CURIE.captures(uri) else {
            return uri.to_string();
        };
        let (prefix, local) = (&caps[1], &caps[2]);
        if local.starts_with("//") {
            return uri.to_string();
        }
        match self.schema.prefixes.get(prefix) {
            Some(p) => format!("{}{}", p.reference(), local),
            None => uri.to_string(),
        }
    }
}
