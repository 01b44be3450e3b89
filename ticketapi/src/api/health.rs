use crate::domain::prelude::*;
use axum::Json;

pub async fn endpoint() -> Json<Heartbeat> {
    Json(Heartbeat::ok())
}
