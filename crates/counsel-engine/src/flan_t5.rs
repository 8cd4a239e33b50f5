//! Local text2text generation with `google/flan-t5-base` via candle.
//!
//! Artifacts (config, tokenizer, safetensors weights) are fetched through
//! the Hugging Face hub cache on first load and mmapped from disk after
//! that. Decoding mutates the model's KV cache, so the loaded model sits
//! behind a mutex and the cache is cleared per request.

use std::sync::Mutex;

use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::LogitsProcessor;
use candle_transformers::models::t5;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::generator::{GenerationParams, Generator};

pub struct FlanT5Generator {
    model: Mutex<t5::T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    device: Device,
    decoder_start_token: u32,
    eos_token: usize,
}

impl FlanT5Generator {
    /// Download (or reuse from the hub cache) and load the model.
    pub fn load(model_id: &str) -> Result<Self, EngineError> {
        let api = Api::new().map_err(|e| EngineError::ModelFetch(e.to_string()))?;
        let repo = api.repo(Repo::with_revision(
            model_id.to_string(),
            RepoType::Model,
            "main".to_string(),
        ));

        let config_path = repo
            .get("config.json")
            .map_err(|e| EngineError::ModelFetch(e.to_string()))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| EngineError::ModelFetch(e.to_string()))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| EngineError::ModelFetch(e.to_string()))?;

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;
        let config: t5::Config = serde_json::from_str(&config_str)
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| EngineError::Tokenizer(e.to_string()))?;

        let device = Device::Cpu;
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| EngineError::ModelLoad(e.to_string()))?
        };
        let model = t5::T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;

        let decoder_start_token =
            config.decoder_start_token_id.unwrap_or(config.pad_token_id) as u32;
        let eos_token = config.eos_token_id;

        info!(model_id, "local model loaded");

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            device,
            decoder_start_token,
            eos_token,
        })
    }

    /// Sampling seed. Wall-clock derived so repeated requests with the
    /// same prompt still sample fresh continuations.
    fn sample_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(299_792_458)
    }
}

#[async_trait]
impl Generator for FlanT5Generator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, EngineError> {
        debug!(chars = prompt.len(), temperature = params.temperature(), "local generation");

        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| EngineError::Tokenizer(e.to_string()))?;
        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        let mut model = self
            .model
            .lock()
            .map_err(|_| EngineError::Inference("model mutex poisoned".to_string()))?;
        model.clear_kv_cache();

        let encoder_output = model.encode(&input_ids)?;

        let mut output_ids = vec![self.decoder_start_token];
        let mut logits_processor =
            LogitsProcessor::new(Self::sample_seed(), Some(params.temperature()), None);

        for step in 0..params.max_new_tokens() {
            // With the KV cache warm, only the newest token is fed back in.
            let decoder_ids = if step == 0 {
                Tensor::new(&output_ids[..], &self.device)?.unsqueeze(0)?
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits = model.decode(&decoder_ids, &encoder_output)?.squeeze(0)?;
            let next = logits_processor.sample(&logits)?;
            if next as usize == self.eos_token {
                break;
            }
            output_ids.push(next);
        }

        let text = self
            .tokenizer
            .decode(&output_ids[1..], true)
            .map_err(|e| EngineError::Tokenizer(e.to_string()))?;

        Ok(text.trim().to_string())
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
