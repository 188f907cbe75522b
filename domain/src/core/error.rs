//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidQuestion(String),

    #[error("{0}")]
    MissingCredential(String),

    #[error("Invalid response from AI service")]
    NoAnswerToken,
}
