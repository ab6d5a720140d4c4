//! Local preview server for generated browser folders.

pub mod app;
mod error;
mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Browser folder being served.
    pub dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir: Arc::new(dir) }
    }
}
