//! Script artifacts: JSON payloads wrapped in a global assignment.
//!
//! Each artifact assigns its payload to a well-known `window` global and then
//! dispatches the shared ready event, so the shell page can start once both
//! `data.js` and `schema.js` have loaded, in either order.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::error::{BrowserError, Result};

/// Global holding the record array.
pub const DATA_VARIABLE: &str = "searchData";
/// Global holding the schema descriptor.
pub const SCHEMA_VARIABLE: &str = "searchSchema";
/// Event dispatched after each assignment.
pub const READY_EVENT: &str = "searchDataReady";

/// Pretty printer with two-space indent that escapes every non-ASCII character
/// as `\uXXXX` (UTF-16 code units, surrogate pairs above the BMP).
struct AsciiFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Serialize a value as indented, ASCII-only JSON.
pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter::new());
    value.serialize(&mut serializer)?;
    // Only ASCII bytes are ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render a script that assigns `value` to `window.<variable>` and signals readiness.
pub fn render_script<T: Serialize + ?Sized>(variable: &str, value: &T) -> Result<String> {
    let json = to_ascii_json(value)?;
    Ok(format!(
        "window.{} = {};\nwindow.dispatchEvent(new Event('{}'));\n",
        variable, json, READY_EVENT
    ))
}

/// Extract the JSON payload between the first `open` and the last `close`
/// character of a script.
pub fn parse_script_json(text: &str, open: char, close: char) -> std::result::Result<Value, String> {
    let start = text.find(open);
    let end = text.rfind(close);
    match (start, end) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str(&text[start..end + close.len_utf8()]).map_err(|e| e.to_string())
        }
        _ => Err(format!("could not locate JSON {}...{}", open, close)),
    }
}

/// Read a script artifact from disk and extract its JSON payload.
pub fn read_script_json(path: impl AsRef<Path>, open: char, close: char) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| BrowserError::io(path, e))?;
    parse_script_json(&text, open, close).map_err(|message| BrowserError::invalid_format(path, message))
}
