//! Embedded static shell page.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::error::{BrowserError, Result};

/// File name of the shell page inside a generated browser.
pub const INDEX_HTML: &str = "index.html";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Bytes of the shell page, copied verbatim into every generated browser.
pub fn index_html() -> Result<Cow<'static, [u8]>> {
    Assets::get(INDEX_HTML)
        .map(|file| file.data)
        .ok_or_else(|| BrowserError::Config(format!("Template file '{}' is not embedded", INDEX_HTML)))
}
