use std::sync::Arc;

use tokio::sync::Mutex;

use counsel_core::models::session::SessionLog;
use counsel_engine::Generator;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn Generator>,
    pub sessions: Arc<Mutex<SessionLog>>,
}
