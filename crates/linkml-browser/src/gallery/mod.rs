//! Gallery maintenance: filtering existing data artifacts and validating folders.

mod filter;
mod validate;

pub use filter::{FilterConfig, STATUS_FIELD, TAXON_FIELD, filter_records, parse_list};
pub use validate::{GalleryReport, validate_gallery};

use std::fs;
use std::path::Path;

use crate::error::{BrowserError, Result};
use crate::input::{Record, records_from_value};
use crate::output::{DATA_VARIABLE, read_script_json, render_script};

/// Read the records held by a `data.js` artifact.
pub fn read_data_script(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let value = read_script_json(path, '[', ']')?;
    records_from_value(value, path)
}

/// Write records as a `data.js` artifact.
pub fn write_data_script(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let script = render_script(DATA_VARIABLE, records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| BrowserError::io(parent, e))?;
        }
    }
    fs::write(path, script).map_err(|e| BrowserError::io(path, e))
}
