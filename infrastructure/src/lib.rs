//! Infrastructure layer for oneword
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use credentials::{EnvCredentialSource, VarLookup};
pub use gemini::GeminiLlmGateway;
