//! Hosted text generation via the Hugging Face Inference API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::generator::{GenerationParams, Generator};

const API_BASE: &str = "https://api-inference.huggingface.co/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_ATTEMPTS: u32 = 3;

pub struct HostedGenerator {
    client: reqwest::Client,
    model_id: String,
    api_token: Option<String>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    temperature: f64,
    max_new_tokens: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl HostedGenerator {
    pub fn new(model_id: String, api_token: Option<String>) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        Ok(Self {
            client,
            model_id,
            api_token,
        })
    }

    async fn send_once(
        &self,
        body: &InferenceRequest<'_>,
    ) -> Result<String, EngineError> {
        let url = format!("{API_BASE}/{}", self.model_id);
        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::Api(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(EngineError::Api(format!("{status}: {detail}")));
        }

        let outputs: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| EngineError::ResponseParse(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| {
                EngineError::ResponseParse("no generated_text in response".to_string())
            })
    }
}

#[async_trait]
impl Generator for HostedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, EngineError> {
        debug!(
            model_id = %self.model_id,
            temperature = params.temperature(),
            "hosted generation"
        );

        let body = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                temperature: params.temperature(),
                max_new_tokens: params.max_new_tokens(),
                do_sample: true,
            },
        };

        // Transient failures (model cold start, throttling) are retried
        // with bounded exponential backoff.
        let mut last_err = None;
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = Duration::from_millis(200 * (1 << attempt));
                tokio::time::sleep(delay).await;
            }
            match self.send_once(&body).await {
                Ok(text) => return Ok(text.trim().to_string()),
                Err(e) => last_err = Some(e),
            }
        }

        Err(last_err
            .unwrap_or_else(|| EngineError::Api("hosted generation failed".to_string())))
    }

    fn backend_name(&self) -> &'static str {
        "hosted"
    }
}
