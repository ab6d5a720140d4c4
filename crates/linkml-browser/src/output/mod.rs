//! Browser artifacts: script payloads and the shell page.

mod assets;
mod script;

pub use assets::{INDEX_HTML, index_html};
pub use script::{
    DATA_VARIABLE, READY_EVENT, SCHEMA_VARIABLE, parse_script_json, read_script_json,
    render_script, to_ascii_json,
};

/// File name of the data artifact.
pub const DATA_JS: &str = "data.js";
/// File name of the schema artifact.
pub const SCHEMA_JS: &str = "schema.js";
