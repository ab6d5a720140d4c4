//! Checks that a gallery folder holds a loadable browser.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ArtifactIssue, BrowserError, Result};
use crate::output::{DATA_JS, INDEX_HTML, SCHEMA_JS, read_script_json};

/// Schema keys echoed back in the summary.
const SUMMARY_KEY_LIMIT: usize = 10;

/// Summary of a gallery folder that passed every check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryReport {
    /// Number of records in `data.js`.
    pub record_count: usize,
    /// First top-level keys of the schema object.
    pub schema_keys: Vec<String>,
}

impl GalleryReport {
    /// One line per artifact, as printed by the validator.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} OK: {} records", DATA_JS, self.record_count),
            format!("{} OK: keys={:?}", SCHEMA_JS, self.schema_keys),
        ]
    }
}

/// Check that `dir` has `index.html`, a `data.js` holding a JSON array and a
/// `schema.js` holding a JSON object.
///
/// Every problem found is reported together in a
/// [`BrowserError::GalleryCheck`].
pub fn validate_gallery(dir: impl AsRef<Path>) -> Result<GalleryReport> {
    let dir = dir.as_ref();
    let data_path = dir.join(DATA_JS);
    let schema_path = dir.join(SCHEMA_JS);
    let index_path = dir.join(INDEX_HTML);

    let mut issues = Vec::new();
    for (name, path) in [
        (DATA_JS, &data_path),
        (SCHEMA_JS, &schema_path),
        (INDEX_HTML, &index_path),
    ] {
        if !path.exists() {
            issues.push(ArtifactIssue::Missing {
                artifact: name.to_string(),
                path: path.clone(),
            });
        }
    }
    if !issues.is_empty() {
        return Err(BrowserError::GalleryCheck(issues));
    }

    let record_count = match read_script_json(&data_path, '[', ']') {
        Ok(Value::Array(items)) => Some(items.len()),
        Ok(_) => {
            issues.push(malformed(DATA_JS, "JSON is not an array".to_string()));
            None
        }
        Err(e) => {
            issues.push(malformed(DATA_JS, detail(e)));
            None
        }
    };

    let schema_keys = match read_script_json(&schema_path, '{', '}') {
        Ok(Value::Object(map)) => Some(
            map.keys()
                .take(SUMMARY_KEY_LIMIT)
                .cloned()
                .collect::<Vec<_>>(),
        ),
        Ok(_) => {
            issues.push(malformed(SCHEMA_JS, "JSON is not an object".to_string()));
            None
        }
        Err(e) => {
            issues.push(malformed(SCHEMA_JS, detail(e)));
            None
        }
    };

    match (record_count, schema_keys) {
        (Some(record_count), Some(schema_keys)) => Ok(GalleryReport {
            record_count,
            schema_keys,
        }),
        _ => Err(BrowserError::GalleryCheck(issues)),
    }
}

fn malformed(artifact: &str, message: String) -> ArtifactIssue {
    ArtifactIssue::Malformed {
        artifact: artifact.to_string(),
        message,
    }
}

fn detail(error: BrowserError) -> String {
    match error {
        BrowserError::InvalidFormat { message, .. } => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_reports_all_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), SCHEMA_JS, "window.searchSchema = {};");

        let err = validate_gallery(dir.path()).unwrap_err();
        let BrowserError::GalleryCheck(issues) = err else {
            panic!("expected gallery check error");
        };
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| matches!(i, ArtifactIssue::Missing { .. })));
    }

    #[test]
    fn test_wrong_payload_shapes() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), INDEX_HTML, "<!DOCTYPE html>");
        write(dir.path(), DATA_JS, "window.searchData = {\"a\": 1};");
        write(dir.path(), SCHEMA_JS, "window.searchSchema = [1, 2];");

        let err = validate_gallery(dir.path()).unwrap_err();
        let BrowserError::GalleryCheck(issues) = err else {
            panic!("expected gallery check error");
        };
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| matches!(i, ArtifactIssue::Malformed { .. })));
    }

    #[test]
    fn test_valid_gallery() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), INDEX_HTML, "<!DOCTYPE html>");
        write(
            dir.path(),
            DATA_JS,
            "window.searchData = [{\"a\": 1}, {\"a\": 2}];\nwindow.dispatchEvent(new Event('searchDataReady'));\n",
        );
        write(
            dir.path(),
            SCHEMA_JS,
            "window.searchSchema = {\"title\": \"T\", \"facets\": []};\n",
        );

        let report = validate_gallery(dir.path()).unwrap();
        assert_eq!(report.record_count, 2);
        assert_eq!(report.schema_keys, vec!["title", "facets"]);
        assert_eq!(report.lines()[0], "data.js OK: 2 records");
    }
}
