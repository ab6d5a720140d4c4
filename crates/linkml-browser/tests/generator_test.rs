//! Integration tests for browser folder generation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

use linkml_browser::output::{DATA_VARIABLE, READY_EVENT, read_script_json};
use linkml_browser::{
    BrowserError, BrowserGenerator, Record, SchemaDescriptor, load_json_data, load_schema,
    save_schema, validate_gallery,
};

fn books() -> Vec<Record> {
    serde_json::from_value(json!([
        {"title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "genre": ["Fiction", "Classic"], "year": 1925},
        {"title": "To Kill a Mockingbird", "author": "Harper Lee", "genre": ["Fiction"], "year": 1960},
        {"title": "Cien años de soledad", "author": "Gabriel García Márquez", "genre": ["Fiction"], "year": 1967}
    ]))
    .unwrap()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("artifact should exist")
}

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Generation Tests
// =============================================================================

#[test]
fn test_generate_writes_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("browser");

    let generator = BrowserGenerator::new(books()).unwrap();
    let summary = generator.generate(&out, false).unwrap();

    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.files.len(), 3);

    let index = read(&out.join("index.html"));
    assert!(index.len() > 1000);
    assert!(index.contains("<!DOCTYPE html>"));

    let data = read(&out.join("data.js"));
    assert!(data.starts_with(&format!("window.{} = [", DATA_VARIABLE)));
    assert!(data.contains("The Great Gatsby"));
    assert!(data.ends_with(&format!(
        "window.dispatchEvent(new Event('{}'));\n",
        READY_EVENT
    )));

    let schema = read(&out.join("schema.js"));
    assert!(schema.starts_with("window.searchSchema = {"));
    assert!(schema.contains("\"searchableFields\""));

    validate_gallery(&out).expect("generated folder should validate");
}

#[test]
fn test_non_ascii_is_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("browser");
    BrowserGenerator::new(books()).unwrap().generate(&out, false).unwrap();

    let data = read(&out.join("data.js"));
    assert!(data.is_ascii());
    assert!(data.contains(r"Cien a\u00f1os de soledad"));

    let parsed = read_script_json(out.join("data.js"), '[', ']').unwrap();
    assert_eq!(parsed[2]["author"], "Gabriel García Márquez");
}

#[test]
fn test_record_key_order_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("browser");
    BrowserGenerator::new(books()).unwrap().generate(&out, false).unwrap();

    let parsed = read_script_json(out.join("data.js"), '[', ']').unwrap();
    let keys: Vec<&str> = parsed[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["title", "author", "genre", "year"]);
}

// =============================================================================
// Overwrite Tests
// =============================================================================

#[test]
fn test_existing_directory_requires_force() {
    let dir = tempfile::tempdir().unwrap();
    let generator = BrowserGenerator::new(books()).unwrap();

    let err = generator.generate(dir.path(), false).unwrap_err();
    assert!(matches!(err, BrowserError::OutputExists(_)));
    assert!(!dir.path().join("data.js").exists());
}

#[test]
fn test_force_replaces_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("browser");
    let generator = BrowserGenerator::new(books()).unwrap();

    generator.generate(&out, true).unwrap();
    fs::write(out.join("test_marker.txt"), "test").unwrap();
    generator.generate(&out, true).unwrap();

    assert!(!out.join("test_marker.txt").exists());
    assert!(out.join("index.html").exists());
    assert!(out.join("data.js").exists());
    assert!(out.join("schema.js").exists());
}

#[test]
fn test_regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("browser");
    let generator = BrowserGenerator::new(books()).unwrap();

    generator.generate(&out, true).unwrap();
    let first: Vec<Vec<u8>> = ["index.html", "data.js", "schema.js"]
        .iter()
        .map(|f| fs::read(out.join(f)).unwrap())
        .collect();

    generator.generate(&out, true).unwrap();
    let second: Vec<Vec<u8>> = ["index.html", "data.js", "schema.js"]
        .iter()
        .map(|f| fs::read(out.join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

// =============================================================================
// Custom Schema Tests
// =============================================================================

#[test]
fn test_custom_schema_is_used_verbatim() {
    let custom: SchemaDescriptor = serde_json::from_value(json!({
        "title": "Test Book Browser",
        "description": "A test browser for books",
        "searchPlaceholder": "Search books...",
        "searchableFields": ["title", "author"],
        "facets": [
            {"field": "genre", "label": "Genre", "type": "array", "sortBy": "count"},
            {"field": "publication_year", "label": "Publication Year", "type": "integer", "sortBy": "alphabetical"}
        ],
        "displayFields": [
            {"field": "title", "label": "Title", "type": "string"},
            {"field": "author", "label": "Author", "type": "string"},
            {"field": "genre", "label": "Genres", "type": "array"}
        ],
        "itemsPerPage": 25
    }))
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("browser");
    BrowserGenerator::with_schema(books(), custom)
        .generate(&out, false)
        .unwrap();

    let schema = read(&out.join("schema.js"));
    assert!(schema.contains("Test Book Browser"));
    assert!(schema.contains("Search books..."));

    let parsed: Value = read_script_json(out.join("schema.js"), '{', '}').unwrap();
    assert_eq!(parsed["itemsPerPage"], 25);
    assert_eq!(parsed["facets"][1]["sortBy"], "alphabetical");
}

#[test]
fn test_schema_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("schema.json");

    let schema = BrowserGenerator::new(books()).unwrap().schema().clone();
    save_schema(&schema, &path).unwrap();
    assert_eq!(load_schema(&path).unwrap(), schema);
}

// =============================================================================
// Loader Tests
// =============================================================================

#[test]
fn test_load_records_from_file() {
    let file = create_test_file(
        r#"[{"name": "Ada", "field": "math"}, {"name": "Alan", "field": "cs"}]"#,
    );
    let records = load_json_data(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["name"], "Alan");
}

#[test]
fn test_non_array_file_is_rejected() {
    let file = create_test_file(r#"{"name": "Ada"}"#);
    let err = load_json_data(file.path()).unwrap_err();
    assert!(matches!(err, BrowserError::InvalidFormat { .. }));
}

#[test]
fn test_empty_records_cannot_be_inferred() {
    let err = BrowserGenerator::new(Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Cannot infer schema from empty data");
}
