//! The [`Generator`] trait, sampling parameters, and backend selection.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::flan_t5::FlanT5Generator;
use crate::hosted::HostedGenerator;

/// Default sampling temperature, matching the UI slider default.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Bounds of the user-controlled temperature slider.
pub const MIN_TEMPERATURE: f64 = 0.1;
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Upper bound on generated tokens per request.
pub const DEFAULT_MAX_NEW_TOKENS: usize = 500;

/// Sampling parameters for a single generation request.
///
/// Temperature is clamped into the slider range at construction, so an
/// out-of-range API value degrades to the nearest bound instead of
/// failing the request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    temperature: f64,
    max_new_tokens: usize,
}

impl GenerationParams {
    pub fn new(temperature: f64) -> Self {
        Self {
            temperature: temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: usize) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_new_tokens(&self) -> usize {
        self.max_new_tokens
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE)
    }
}

/// A text-generation backend. Sampling is always on; the caller controls
/// only the temperature and token bound through [`GenerationParams`].
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParams)
        -> Result<String, EngineError>;

    /// Short backend identifier reported by the health endpoint.
    fn backend_name(&self) -> &'static str;
}

/// Engine configuration, assembled from the environment by the binary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// `local` (candle) or `hosted` (HF Inference API).
    pub backend: String,
    /// Hub model id, e.g. `google/flan-t5-base`.
    pub model_id: String,
    /// Bearer token for the hosted backend. Unauthenticated requests are
    /// allowed but rate-limited aggressively by the API.
    pub api_token: Option<String>,
}

/// Build the configured generator. The local backend downloads and loads
/// model weights here, once; the returned handle is shared for the
/// process lifetime.
pub fn create_generator(config: &EngineConfig) -> Result<Arc<dyn Generator>, EngineError> {
    match config.backend.as_str() {
        "local" => {
            tracing::info!(model_id = %config.model_id, "loading local model");
            let generator = FlanT5Generator::load(&config.model_id)?;
            Ok(Arc::new(generator))
        }
        "hosted" => {
            tracing::info!(model_id = %config.model_id, "using hosted inference API");
            let generator =
                HostedGenerator::new(config.model_id.clone(), config.api_token.clone())?;
            Ok(Arc::new(generator))
        }
        other => Err(EngineError::Config(format!(
            "unknown backend `{other}` (expected `local` or `hosted`)"
        ))),
    }
}
