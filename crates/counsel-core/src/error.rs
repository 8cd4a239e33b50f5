use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown therapeutic approach: {0}")]
    UnknownApproach(String),
}
