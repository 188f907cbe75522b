//! Generation parameters value object

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling and time limits for a single-word request.
///
/// Defaults keep randomness low and the output tiny, since only the first
/// word of the reply is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens the backend may produce
    pub max_output_tokens: u32,
    /// Upper bound on the whole HTTP round-trip
    pub timeout: Duration,
}

impl GenerationParams {
    pub const DEFAULT_TEMPERATURE: f32 = 0.1;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 10;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}
