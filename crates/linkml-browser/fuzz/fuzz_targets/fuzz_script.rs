//! Fuzz target for reading script artifacts.
//!
//! Payload extraction works on arbitrary text, so it must handle brackets in
//! any order and multi-byte characters without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkml_browser::output::parse_script_json;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_script_json(text, '[', ']');
        let _ = parse_script_json(text, '{', '}');
    }
});
