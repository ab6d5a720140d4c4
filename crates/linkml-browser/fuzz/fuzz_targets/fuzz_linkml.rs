//! Fuzz target for LinkML element extraction.
//!
//! Schemas may contain inheritance cycles and dangling references; extraction
//! must report them as errors rather than overflow or panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkml_browser::linkml::{SchemaView, extract_elements};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(view) = SchemaView::from_yaml(text) {
            let _ = extract_elements(&view);
        }
    }
});
