//! Core domain concepts.
//!
//! - [`question::Question`]: a validated question to pose to the backend
//! - [`answer::Answer`]: the single word extracted from a reply
//! - [`credential::ApiKey`]: the backend credential, redacted in output
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod credential;
pub mod error;
pub mod question;
pub mod string;
