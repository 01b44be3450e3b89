use crate::core::prelude::*;
use axum::{
    routing::{get, post},
    Router,
};

pub mod download;
pub mod health;
pub mod html;
pub mod ticket;

/// Builds the HTTP routes of the ticket service.
///
/// * `GET /` - the booking form.
/// * `POST /ticket` - generates a ticket and renders its card.
/// * `GET /download/{filename}` - the PDF receipt of a generated ticket.
/// * `GET /health` - liveness heartbeat.
///
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ticket::form))
        .route("/ticket", post(ticket::submit))
        .route("/download/{filename}", get(download::endpoint))
        .route("/health", get(health::endpoint))
        .with_state(state)
}
