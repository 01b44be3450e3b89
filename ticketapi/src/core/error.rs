use crate::{api::html, domain::prelude::*, render::RenderError};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Failure of a single request.
///
/// Validation failures are answered by re-rendering the form with a message;
/// everything else aborts the submission and is logged.
///
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no receipt named {0}")]
    NotFound(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                tracing::info!(reason = %err, "ticket request rejected");
                let today = chrono::Local::now().date_naive();
                let page = html::form_page(today, Some(&err.user_message()));
                (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
            }
            AppError::NotFound(name) => {
                tracing::debug!(%name, "receipt not found");
                (StatusCode::NOT_FOUND, "Ticket not found").into_response()
            }
            err @ (AppError::Render(_) | AppError::Io(_)) => {
                tracing::error!(error = %err, "ticket generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
