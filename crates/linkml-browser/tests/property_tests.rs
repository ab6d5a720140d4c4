//! Property-based tests for schema inference and artifact rendering.
//!
//! These tests use proptest to generate random record collections and verify
//! that inference keeps its invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p linkml-browser --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p linkml-browser --test property_tests
//! ```

use indexmap::IndexSet;
use proptest::prelude::*;
use serde_json::{Value, json};

use linkml_browser::inference::{DEFAULT_MAX_DISTINCT_VALUES, DEFAULT_SAMPLE_SIZE, FieldProfiles};
use linkml_browser::output::{parse_script_json, render_script};
use linkml_browser::{FieldType, Record, infer_schema};

// =============================================================================
// Test Strategies
// =============================================================================

/// Short field names so records share fields often.
fn field_name() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

/// Scalars and sequences, including values inference ignores.
fn field_value() -> impl Strategy<Value = Value> {
    let scalar = prop_oneof![
        "[a-z ]{0,8}".prop_map(Value::from),
        "[^\\x00-\\x1f]{0,6}".prop_map(Value::from),
        (-50i64..50).prop_map(Value::from),
        (-20i32..20).prop_map(|q| json!(f64::from(q) / 4.0)),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ];
    prop_oneof![
        4 => scalar.clone(),
        1 => prop::collection::vec(scalar, 0..4).prop_map(Value::from),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec((field_name(), field_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 1..160)
}

fn universe(records: &[Record]) -> IndexSet<&str> {
    records
        .iter()
        .flat_map(|r| r.keys().map(String::as_str))
        .collect()
}

// =============================================================================
// Inference Properties
// =============================================================================

proptest! {
    #[test]
    fn display_fields_are_the_sorted_universe(records in records()) {
        let schema = infer_schema(&records, None, None).unwrap();

        let mut expected: Vec<&str> = universe(&records).into_iter().collect();
        expected.sort();
        let display: Vec<&str> = schema.display_fields.iter().map(|f| f.field.as_str()).collect();
        prop_assert_eq!(display, expected);
    }

    #[test]
    fn facets_have_bounded_sampled_cardinality(records in records()) {
        let schema = infer_schema(&records, None, None).unwrap();
        let profiles = FieldProfiles::build(&records, DEFAULT_SAMPLE_SIZE);

        for facet in &schema.facets {
            let distinct = profiles.get(&facet.field).unwrap().cardinality();
            prop_assert!(distinct > 1 && distinct < DEFAULT_MAX_DISTINCT_VALUES);
        }
    }

    #[test]
    fn searchable_fields_are_never_empty_or_foreign(records in records()) {
        let schema = infer_schema(&records, None, None).unwrap();
        let universe = universe(&records);

        if !universe.is_empty() {
            prop_assert!(!schema.searchable_fields.is_empty());
        }
        for field in &schema.searchable_fields {
            prop_assert!(universe.contains(field.as_str()));
        }
    }

    #[test]
    fn integer_facets_only_hold_integers(records in records()) {
        let schema = infer_schema(&records, None, None).unwrap();
        let profiles = FieldProfiles::build(&records, DEFAULT_SAMPLE_SIZE);

        for facet in schema.facets.iter().filter(|f| f.field_type == FieldType::Integer) {
            let profile = profiles.get(&facet.field).unwrap();
            prop_assert!(!profile.has_string && !profile.has_array);
            for value in &profile.unique_values {
                prop_assert!(value.parse::<i128>().is_ok());
            }
        }
    }

    #[test]
    fn inference_is_deterministic(records in records()) {
        let first = infer_schema(&records, None, None).unwrap();
        let second = infer_schema(&records, None, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn data_scripts_are_ascii_and_parse_back(records in records()) {
        let script = render_script("searchData", &records).unwrap();
        prop_assert!(script.is_ascii());

        let parsed = parse_script_json(&script, '[', ']').unwrap();
        prop_assert_eq!(parsed, serde_json::to_value(&records).unwrap());
    }
}
