//! Per-field value profiling over the record sample.

use indexmap::{IndexMap, IndexSet};

use crate::input::{Record, ValueKind};
use crate::schema::FieldType;

/// What the sample revealed about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProfile {
    /// Some sampled value was a sequence.
    pub has_array: bool,
    /// Some sampled value was a string.
    pub has_string: bool,
    /// Some sampled value was a number.
    pub has_number: bool,
    /// Distinct stringified scalars, sequence members unpacked.
    pub unique_values: IndexSet<String>,
    /// No plain string value was seen. Strings inside sequences do not count.
    pub all_numbers: bool,
}

impl Default for FieldProfile {
    fn default() -> Self {
        Self {
            has_array: false,
            has_string: false,
            has_number: false,
            unique_values: IndexSet::new(),
            all_numbers: true,
        }
    }
}

impl FieldProfile {
    /// Fold one observed value into the profile.
    pub fn observe(&mut self, kind: ValueKind<'_>) {
        match kind {
            ValueKind::Sequence(items) => {
                self.has_array = true;
                for item in items {
                    if let Some(text) = ValueKind::of(item).scalar_text() {
                        self.unique_values.insert(text);
                    }
                }
            }
            ValueKind::Number(n) => {
                self.has_number = true;
                self.unique_values.insert(n.to_string());
            }
            ValueKind::Text(s) => {
                self.has_string = true;
                self.all_numbers = false;
                self.unique_values.insert(s.to_string());
            }
            ValueKind::Other => {}
        }
    }

    /// Number of distinct sampled values.
    pub fn cardinality(&self) -> usize {
        self.unique_values.len()
    }

    /// Whether the field should take part in free-text search.
    pub fn is_textual(&self) -> bool {
        self.has_string || self.has_array
    }

    /// Display type: `array` for sequences, otherwise `string`.
    pub fn base_type(&self) -> FieldType {
        if self.has_array {
            FieldType::Array
        } else {
            FieldType::String
        }
    }

    /// Every sampled value is a plain number that parses as an integer, signed
    /// or unsigned 64-bit.
    ///
    /// All-or-nothing: one value such as `2.5` keeps the whole field a string.
    pub fn is_integer_valued(&self) -> bool {
        self.all_numbers
            && !self.has_array
            && self
                .unique_values
                .iter()
                .all(|v| !v.is_empty() && v.trim().parse::<i128>().is_ok())
    }

    /// Facet type: the base type, upgraded to `integer` where possible.
    pub fn facet_type(&self) -> FieldType {
        if self.is_integer_valued() {
            FieldType::Integer
        } else {
            self.base_type()
        }
    }
}

/// Profiles for every field in the universe, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FieldProfiles {
    profiles: IndexMap<String, FieldProfile>,
}

impl FieldProfiles {
    /// Build profiles: the field universe comes from all records, the profiles
    /// from the first `sample_size` records only.
    pub fn build(records: &[Record], sample_size: usize) -> Self {
        let mut profiles: IndexMap<String, FieldProfile> = IndexMap::new();

        for record in records {
            for key in record.keys() {
                if !profiles.contains_key(key) {
                    profiles.insert(key.clone(), FieldProfile::default());
                }
            }
        }

        let sample = &records[..sample_size.min(records.len())];
        for record in sample {
            for (key, value) in record {
                if let Some(profile) = profiles.get_mut(key) {
                    profile.observe(ValueKind::of(value));
                }
            }
        }

        Self { profiles }
    }

    /// Look up one field's profile.
    pub fn get(&self, field: &str) -> Option<&FieldProfile> {
        self.profiles.get(field)
    }

    /// Iterate fields and profiles in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
