use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("model artifacts unavailable: {0}")]
    ModelFetch(String),

    #[error("model load failed: {0}")]
    ModelLoad(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("inference API error: {0}")]
    Api(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("engine configuration error: {0}")]
    Config(String),
}

impl From<candle_core::Error> for EngineError {
    fn from(e: candle_core::Error) -> Self {
        EngineError::Inference(e.to_string())
    }
}
