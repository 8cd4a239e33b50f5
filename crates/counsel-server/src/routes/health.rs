use axum::extract::State;
use axum::Json;
use serde::Serialize;

use counsel_engine::Generator;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.engine.backend_name(),
    })
}
