//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as API timeouts and sampling limits.

use oneword_domain::GenerationParams;

/// Answer fetching configuration.
///
/// Controls the generation parameters attached to every request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnswerConfig {
    /// Sampling and timeout settings sent with each request.
    pub generation: GenerationParams,
}

impl AnswerConfig {
    pub fn new(generation: GenerationParams) -> Self {
        Self { generation }
    }
}
