use axum::{Extension, Json};
use serde::Serialize;

use crate::app_module::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub generation_enabled: bool,
}

pub async fn health(Extension(ctx): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        generation_enabled: ctx.generation_enabled(),
    })
}
