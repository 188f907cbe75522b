//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;

pub use gemini::FileGeminiConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.temperature must be between 0.0 and 2.0 (got {0})")]
    InvalidTemperature(f32),

    #[error("gemini.max_output_tokens cannot be 0")]
    InvalidMaxOutputTokens,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("gemini.api_key_env cannot be empty when no api_key is set")]
    EmptyApiKeyEnv,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini backend settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let gemini = &self.gemini;

        if gemini.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if !(0.0..=2.0).contains(&gemini.temperature) {
            issues.push(ConfigValidationError::InvalidTemperature(gemini.temperature));
        }
        if gemini.max_output_tokens == 0 {
            issues.push(ConfigValidationError::InvalidMaxOutputTokens);
        }
        if gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if gemini.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if gemini.api_key.is_none() && gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }

        issues
    }

    /// Render the effective configuration as TOML with any direct API key masked.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.gemini.api_key.is_some() {
            shown.gemini.api_key = Some("***".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}
