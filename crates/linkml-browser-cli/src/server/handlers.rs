//! API request handlers.

use axum::{Json, extract::State};
use linkml_browser::{GalleryReport, validate_gallery};

use super::AppState;
use super::error::ApiError;

/// Validator summary of the served folder.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<GalleryReport>, ApiError> {
    let report = validate_gallery(state.dir.as_path())?;
    Ok(Json(report))
}
