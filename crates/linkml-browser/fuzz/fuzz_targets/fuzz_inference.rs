//! Fuzz target for schema inference.
//!
//! Feeds arbitrary JSON through the record loader and, when it is an array
//! of objects, through inference. Inference must never panic.

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use linkml_browser::input::records_from_value;
use linkml_browser::infer_schema;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(value) = serde_json::from_slice(data) else {
        return;
    };
    if let Ok(records) = records_from_value(value, Path::new("fuzz.json")) {
        let _ = infer_schema(&records, None, None);
    }
});
