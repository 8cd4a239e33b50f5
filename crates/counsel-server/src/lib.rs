//! counsel-server
//!
//! The interactive surface of the counselor guidance assistant: an axum
//! HTTP service serving the form page and a JSON API. Wires crisis
//! screening, prompt construction, generation, the in-memory session log,
//! and report export together.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod audit;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Assemble the application router. Shared between `main` and the tests.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::ui::form_page))
        .route("/health", get(routes::health::health_check))
        .route("/approaches", get(routes::approaches::list_approaches))
        .route("/examples", get(routes::examples::list_examples))
        .route("/suggestions", post(routes::suggestions::create_suggestions))
        .route("/sessions", get(routes::sessions::list_sessions))
        .route("/sessions/{id}", get(routes::sessions::get_session))
        .route("/sessions/{id}/export", get(routes::sessions::export_session))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
