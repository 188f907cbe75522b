//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative-AI backend.

use async_trait::async_trait;
use oneword_domain::{ApiKey, GenerationParams};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// Adapters classify transport outcomes into these variants; the use case
/// maps them onto the caller-facing taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Rate limited by backend")]
    RateLimited,

    #[error("Backend rejected credentials (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response from AI service")]
    InvalidResponse,

    #[error("{0}")]
    RequestFailed(String),
}

/// A single-shot text generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Full prompt text
    pub prompt: String,
    /// Sampling and timeout settings
    pub params: GenerationParams,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            prompt: prompt.into(),
            params,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the backend.
/// Implementations (adapters) live in the infrastructure layer. Each call
/// to [`generate`](LlmGateway::generate) must issue at most one outbound
/// request and must not retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the prompt and return the reply text of the first candidate
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerateRequest,
    ) -> Result<String, GatewayError>;

    /// Human-readable backend identifier for logs (e.g. the model name)
    fn name(&self) -> &str;
}
