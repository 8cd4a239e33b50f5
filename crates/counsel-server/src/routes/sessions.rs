use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use counsel_core::models::session::SessionRecord;
use counsel_export::render::{render_report, suggested_filename};

use crate::error::ApiError;
use crate::state::AppState;

/// The history sidebar shows the last five sessions.
const DEFAULT_LIMIT: usize = 5;

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Serialize)]
pub struct SessionListResponse {
    pub total: usize,
    pub sessions: Vec<SessionRecord>,
}

/// Recent history, newest first.
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<SessionListResponse> {
    let log = state.sessions.lock().await;
    Json(SessionListResponse {
        total: log.len(),
        sessions: log.recent(query.limit).into_iter().cloned().collect(),
    })
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionRecord>, ApiError> {
    let log = state.sessions.lock().await;
    log.get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
}

/// The plain-text report as a file download.
pub async fn export_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let log = state.sessions.lock().await;
    let record = log
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;

    let report = render_report(record)?;
    let filename = suggested_filename(&record.approach);

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, report).into_response())
}
