use crate::core::prelude::*;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::io::ErrorKind;

/// Serves a previously generated PDF receipt as an attachment.
///
/// Only plain file names ending in `.pdf` are looked up, so a request can
/// never reach outside the output directory.
///
pub async fn endpoint(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if sanitize_filename::sanitize(&filename) != filename || !filename.ends_with(".pdf") {
        return Err(AppError::NotFound(filename));
    }

    let path = state.config.output_dir.join(&filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(AppError::NotFound(filename)),
        Err(err) => return Err(err.into()),
    };

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes))
}
