//! Credential source port
//!
//! Supplies the backend API key. Sources are consulted on every request
//! and must not cache the resolved key.

use oneword_domain::{ApiKey, DomainError};

/// Provides the API key for the generative-AI backend
pub trait CredentialSource: Send + Sync {
    /// Resolve the key, or fail with [`DomainError::MissingCredential`]
    fn api_key(&self) -> Result<ApiKey, DomainError>;
}

/// Credential source holding a fixed optional key
///
/// Useful for injecting a key obtained elsewhere (or none, to exercise the
/// missing-configuration path).
#[derive(Debug, Clone)]
pub struct StaticCredentialSource {
    key: Option<String>,
    label: String,
}

impl StaticCredentialSource {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            label: "API key".to_string(),
        }
    }

    /// A source that never yields a key
    pub fn missing(label: impl Into<String>) -> Self {
        Self {
            key: None,
            label: label.into(),
        }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn api_key(&self) -> Result<ApiKey, DomainError> {
        ApiKey::try_new(self.key.clone().unwrap_or_default(), &self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_yields_key() {
        let source = StaticCredentialSource::new("k-123");
        assert_eq!(source.api_key().unwrap().expose(), "k-123");
    }

    #[test]
    fn test_missing_source_fails_with_label() {
        let source = StaticCredentialSource::missing("GEMINI_API_KEY");
        assert_eq!(
            source.api_key().unwrap_err(),
            DomainError::MissingCredential("GEMINI_API_KEY not configured".to_string())
        );
    }

    #[test]
    fn test_blank_static_key_is_missing() {
        assert!(StaticCredentialSource::new("   ").api_key().is_err());
    }
}
