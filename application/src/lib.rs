//! Application layer for oneword
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnswerConfig;
pub use ports::{
    credentials::{CredentialSource, StaticCredentialSource},
    llm_gateway::{GatewayError, GenerateRequest, LlmGateway},
    progress::{FetchProgressNotifier, NoProgress},
};
pub use use_cases::fetch_answer::{FetchAnswerError, FetchAnswerErrorKind, FetchAnswerUseCase};
