//! API credential value object

use super::error::DomainError;

/// A non-empty API key for the generative-AI backend.
///
/// `Debug` and `Display` never reveal the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw key. `source` names where the key was expected
    /// (e.g. an environment variable) and is used in the error message.
    pub fn try_new(raw: impl Into<String>, source: &str) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingCredential(format!(
                "{source} not configured"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Expose the secret for placing it on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}
