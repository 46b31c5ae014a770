//! Provider integration for the AstraAI gateway
//!
//! One client, one call shape: a single-turn generate-content request
//! against Google's generative-language API.

pub mod base;
pub mod gemini;

pub use base::{ProviderError, ProviderResult};
pub use gemini::GeminiClient;
