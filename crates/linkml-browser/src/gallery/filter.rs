//! Allow-list filtering and balanced down-sampling of record collections.

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use tracing::debug;

use crate::input::Record;

/// Field checked against the status allow-list.
pub const STATUS_FIELD: &str = "status";
/// Field checked against the taxon allow-list.
pub const TAXON_FIELD: &str = "taxon_id";

/// Filter and sampling options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Statuses to keep, matched case-insensitively. Empty keeps all.
    pub status_allow: Vec<String>,
    /// Taxon identifiers to keep, matched exactly. Empty keeps all.
    pub taxon_allow: Vec<String>,
    /// Field whose values the budget is spread across.
    pub balance_by: Option<String>,
    /// Maximum records to keep; 0 means unlimited.
    pub max_records: usize,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status_allow(mut self, statuses: Vec<String>) -> Self {
        self.status_allow = statuses;
        self
    }

    pub fn with_taxon_allow(mut self, taxa: Vec<String>) -> Self {
        self.taxon_allow = taxa;
        self
    }

    pub fn with_balance_by(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.balance_by = if field.is_empty() { None } else { Some(field) };
        self
    }

    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }
}

/// Split a comma-separated list, trimming items and dropping empty ones.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply allow-lists, then cut down to `max_records`.
///
/// With a balance field, each distinct value of that field (in first-seen
/// order, with a missing field as one more value) gets `max_records / groups` records, and any remaining budget is
/// filled with the earliest records not yet taken. Without one the first
/// `max_records` records are kept.
pub fn filter_records(records: &[Record], config: &FilterConfig) -> Vec<Record> {
    let status_allow: IndexSet<String> =
        config.status_allow.iter().map(|s| s.to_uppercase()).collect();
    let taxon_allow: IndexSet<&str> = config.taxon_allow.iter().map(String::as_str).collect();

    let filtered: Vec<&Record> = records
        .iter()
        .filter(|record| {
            if !status_allow.is_empty() {
                let status = field_text(record, STATUS_FIELD).to_uppercase();
                if !status_allow.contains(&status) {
                    return false;
                }
            }
            if !taxon_allow.is_empty() && !taxon_allow.contains(field_text(record, TAXON_FIELD).as_str()) {
                return false;
            }
            true
        })
        .collect();
    debug!(input = records.len(), kept = filtered.len(), "applied allow-lists");

    let max = config.max_records;
    if max == 0 || filtered.len() <= max {
        return filtered.into_iter().cloned().collect();
    }

    let Some(balance_by) = config.balance_by.as_deref() else {
        return filtered.into_iter().take(max).cloned().collect();
    };

    let mut groups: IndexMap<Option<String>, Vec<usize>> = IndexMap::new();
    for (index, record) in filtered.iter().enumerate() {
        groups
            .entry(group_key(record, balance_by))
            .or_default()
            .push(index);
    }

    let per_group = max / groups.len();
    debug!(groups = groups.len(), per_group, "balancing sample");

    let mut taken: IndexSet<usize> = IndexSet::with_capacity(max);
    for members in groups.values() {
        taken.extend(members.iter().take(per_group).copied());
    }
    for index in 0..filtered.len() {
        if taken.len() >= max {
            break;
        }
        taken.insert(index);
    }

    taken
        .into_iter()
        .take(max)
        .map(|index| filtered[index].clone())
        .collect()
}

/// Balance group of a record: the field's JSON text, or `None` when missing.
///
/// `null`, `"null"` and `1` versus `"1"` each land in their own group.
fn group_key(record: &Record, field: &str) -> Option<String> {
    record.get(field).map(Value::to_string)
}

/// Text form of a field for allow-list checks; missing and null are empty.
fn field_text(record: &Record, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r["id"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("A, B,,C "), vec!["A", "B", "C"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_status_is_case_insensitive() {
        let data = records(json!([
            {"id": "1", "status": "complete"},
            {"id": "2", "status": "DRAFT"},
            {"id": "3"},
        ]));
        let config = FilterConfig::new().with_status_allow(vec!["COMPLETE".into()]);
        assert_eq!(ids(&filter_records(&data, &config)), vec!["1"]);
    }

    #[test]
    fn test_taxon_is_exact() {
        let data = records(json!([
            {"id": "1", "taxon_id": "NCBITaxon:9606"},
            {"id": "2", "taxon_id": "ncbitaxon:9606"},
        ]));
        let config = FilterConfig::new().with_taxon_allow(vec!["NCBITaxon:9606".into()]);
        assert_eq!(ids(&filter_records(&data, &config)), vec!["1"]);
    }

    #[test]
    fn test_truncates_without_balance_key() {
        let data = records(json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]));
        let config = FilterConfig::new().with_max_records(2);
        assert_eq!(ids(&filter_records(&data, &config)), vec!["1", "2"]);
    }

    #[test]
    fn test_zero_means_unlimited() {
        let data = records(json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]));
        assert_eq!(filter_records(&data, &FilterConfig::new()).len(), 3);
    }

    #[test]
    fn test_balance_fills_remainder_in_input_order() {
        let data = records(json!([
            {"id": "a1", "g": "A"},
            {"id": "a2", "g": "A"},
            {"id": "a3", "g": "A"},
            {"id": "b1", "g": "B"},
            {"id": "c1", "g": "C"},
        ]));
        // 4 / 3 groups = 1 each, then one more from the front.
        let config = FilterConfig::new().with_balance_by("g").with_max_records(4);
        assert_eq!(ids(&filter_records(&data, &config)), vec!["a1", "b1", "c1", "a2"]);
    }

    #[test]
    fn test_null_and_missing_balance_values_are_separate_groups() {
        let data = records(json!([
            {"id": "a1", "g": "A"},
            {"id": "a2", "g": "A"},
            {"id": "n1", "g": null},
            {"id": "n2", "g": null},
            {"id": "m1"},
            {"id": "m2"},
            {"id": "s1", "g": "null"},
        ]));
        let config = FilterConfig::new().with_balance_by("g").with_max_records(4);
        assert_eq!(ids(&filter_records(&data, &config)), vec!["a1", "n1", "m1", "s1"]);
    }

    #[test]
    fn test_more_groups_than_budget() {
        let data = records(json!([
            {"id": "1", "g": "A"},
            {"id": "2", "g": "B"},
            {"id": "3", "g": "C"},
        ]));
        let config = FilterConfig::new().with_balance_by("g").with_max_records(2);
        assert_eq!(ids(&filter_records(&data, &config)), vec!["1", "2"]);
    }

    #[test]
    fn test_records_without_ids_are_not_duplicated() {
        let data = records(json!([
            {"g": "A", "n": 1},
            {"g": "A", "n": 2},
            {"g": "B", "n": 3},
        ]));
        let config = FilterConfig::new().with_balance_by("g").with_max_records(2);
        let out = filter_records(&data, &config);
        let ns: Vec<i64> = out.iter().map(|r| r["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![1, 3]);
    }
}
