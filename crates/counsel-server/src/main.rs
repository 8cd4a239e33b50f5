use std::env;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use counsel_core::models::session::SessionLog;
use counsel_engine::{create_generator, EngineConfig};
use counsel_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind = env::var("COUNSEL_BIND").unwrap_or_else(|_| "127.0.0.1:8787".to_string());
    let backend = env::var("COUNSEL_BACKEND").unwrap_or_else(|_| "local".to_string());
    let model_id =
        env::var("COUNSEL_MODEL").unwrap_or_else(|_| "google/flan-t5-base".to_string());
    let api_token = env::var("HF_API_TOKEN").ok();

    // The local backend downloads and loads the model here, once; every
    // request afterwards reuses the same handle.
    let engine_config = EngineConfig {
        backend,
        model_id,
        api_token,
    };
    let engine = create_generator(&engine_config)?;

    let state = AppState {
        engine,
        sessions: Arc::new(Mutex::new(SessionLog::new())),
    };

    let app = counsel_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(bind.as_str()).await?;
    tracing::info!(%bind, "counsel server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
