//! Gemini provider configuration from TOML (`[gemini]` section)

use oneword_domain::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, prefer the env var).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model identifier used in the `models/{model}:generateContent` path.
    pub model: String,
    /// Sampling temperature (default: 0.1).
    pub temperature: f32,
    /// Maximum output tokens per reply (default: 10).
    pub max_output_tokens: u32,
    /// Timeout in seconds for the whole request (default: 10).
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            temperature: GenerationParams::DEFAULT_TEMPERATURE,
            max_output_tokens: GenerationParams::DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_seconds: GenerationParams::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl FileGeminiConfig {
    /// Convert to the domain generation parameters.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }
}
