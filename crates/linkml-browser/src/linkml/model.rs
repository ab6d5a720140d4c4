//! The subset of the LinkML metamodel needed to browse a schema.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A LinkML schema document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaDefinition {
    pub id: Option<String>,
    pub name: Option<String>,
    pub default_prefix: Option<String>,
    pub prefixes: IndexMap<String, Prefix>,
    #[serde(deserialize_with = "named_map")]
    pub slots: IndexMap<String, SlotDefinition>,
    #[serde(deserialize_with = "named_map")]
    pub classes: IndexMap<String, ClassDefinition>,
    #[serde(deserialize_with = "named_map")]
    pub enums: IndexMap<String, EnumDefinition>,
}

/// A prefix declaration, either `ex: https://...` or the expanded form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Prefix {
    Reference(String),
    Expanded { prefix_reference: String },
}

impl Prefix {
    pub fn reference(&self) -> &str {
        match self {
            Prefix::Reference(r) => r,
            Prefix::Expanded { prefix_reference } => prefix_reference,
        }
    }
}

/// Metadata shared by slots, classes and enums.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommonMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<Value>,
    #[serde(deserialize_with = "one_or_many")]
    pub comments: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub aliases: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub see_also: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub in_subset: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub exact_mappings: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub close_mappings: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub related_mappings: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub broad_mappings: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub narrow_mappings: Vec<String>,
}

impl CommonMetadata {
    /// Exact, close, related, broad and narrow mappings, in that order.
    pub fn mappings(&self) -> Vec<String> {
        [
            &self.exact_mappings,
            &self.close_mappings,
            &self.related_mappings,
            &self.broad_mappings,
            &self.narrow_mappings,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlotDefinition {
    #[serde(flatten)]
    pub common: CommonMetadata,
    pub range: Option<String>,
    pub required: Option<bool>,
    pub multivalued: Option<bool>,
    pub slot_uri: Option<String>,
    pub domain: Option<String>,
    pub pattern: Option<String>,
    pub minimum_value: Option<Value>,
    pub maximum_value: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassDefinition {
    #[serde(flatten)]
    pub common: CommonMetadata,
    pub is_a: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub mixins: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub slots: Vec<String>,
    #[serde(deserialize_with = "named_map")]
    pub attributes: IndexMap<String, SlotDefinition>,
    pub class_uri: Option<String>,
    #[serde(rename = "abstract")]
    pub is_abstract: Option<bool>,
    pub mixin: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnumDefinition {
    #[serde(flatten)]
    pub common: CommonMetadata,
    pub enum_uri: Option<String>,
    /// Values keyed by their text; the definitions themselves are not browsed.
    pub permissible_values: IndexMap<String, Value>,
}

/// Accept a single string where a list is expected.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}

/// Accept `name:` entries with an empty body.
fn named_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<IndexMap<String, Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, body)| (name, body.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_schema() {
        let yaml = r#"
id: https://example.org/test
name: test
prefixes:
  ex: https://example.org/
  linkml:
    prefix_prefix: linkml
    prefix_reference: https://w3id.org/linkml/
slots:
  id:
    identifier: true
  note:
classes:
  Thing:
    abstract: true
    slots: [id]
    comments: a single comment
enums:
  Color:
    permissible_values:
      red:
      green:
        description: Green
"#;
        let schema: SchemaDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.name.as_deref(), Some("test"));
        assert_eq!(schema.prefixes["ex"].reference(), "https://example.org/");
        assert_eq!(schema.prefixes["linkml"].reference(), "https://w3id.org/linkml/");
        assert_eq!(schema.slots.len(), 2);
        assert!(schema.slots["id"].range.is_none());

        let thing = &schema.classes["Thing"];
        assert_eq!(thing.is_abstract, Some(true));
        assert_eq!(thing.common.comments, vec!["a single comment"]);

        let color = &schema.enums["Color"];
        assert_eq!(color.permissible_values.keys().collect::<Vec<_>>(), vec!["red", "green"]);
    }

    #[test]
    fn test_mappings_are_concatenated_in_order() {
        let meta = CommonMetadata {
            exact_mappings: vec!["a:1".into()],
            narrow_mappings: vec!["n:1".into()],
            close_mappings: vec!["c:1".into()],
            ..CommonMetadata::default()
        };
        assert_eq!(meta.mappings(), vec!["a:1", "c:1", "n:1"]);
    }
}
