//! counsel-engine
//!
//! Text generation behind the [`Generator`] trait. Two backends: a local
//! candle runner for `google/flan-t5-base` (weights fetched through the
//! Hugging Face hub and held for the process lifetime) and a hosted
//! Hugging Face Inference API client. The backend is chosen once at
//! startup by [`create_generator`]; callers only see the trait object.

pub mod error;
pub mod flan_t5;
pub mod generator;
pub mod hosted;

pub use generator::{create_generator, EngineConfig, GenerationParams, Generator};
