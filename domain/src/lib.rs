//! Domain layer for oneword
//!
//! This crate contains the core value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Single-word answers
//!
//! A [`Question`] is turned into a prompt by [`PromptTemplate`], and the
//! backend's reply is reduced to an [`Answer`]: the first token after
//! splitting on whitespace and `, . ! ? ; :`.
//!
//! ## Number theory
//!
//! The [`math`] module holds Fibonacci, primality, HCF and LCM helpers.

pub mod config;
pub mod core;
pub mod math;
pub mod prompt;

// Re-export commonly used types
pub use config::{GenerationParams, OutputFormat};
pub use core::{
    answer::Answer, credential::ApiKey, error::DomainError, question::Question,
    string::preview,
};
pub use math::MathError;
pub use prompt::PromptTemplate;
