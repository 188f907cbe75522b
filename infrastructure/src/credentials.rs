//! Credential sources backed by configuration and the process environment.

use crate::config::FileGeminiConfig;
use oneword_application::CredentialSource;
use oneword_domain::{ApiKey, DomainError};
use std::fmt;
use std::sync::Arc;

/// Looks up a variable by name; `None` when unset.
pub type VarLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves the API key from a direct config value, falling back to an
/// environment variable.
///
/// The variable is looked up on every call; nothing is cached.
#[derive(Clone)]
pub struct EnvCredentialSource {
    direct: Option<String>,
    env_var: String,
    lookup: VarLookup,
}

impl EnvCredentialSource {
    /// Read the key from `env_var` only.
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            direct: None,
            env_var: env_var.into(),
            lookup: Arc::new(|name| std::env::var(name).ok()),
        }
    }

    /// Build from the `[gemini]` config section.
    pub fn from_config(config: &FileGeminiConfig) -> Self {
        Self {
            direct: config.api_key.clone(),
            ..Self::new(config.api_key_env.clone())
        }
    }

    /// Replace the process environment with another variable source.
    pub fn with_lookup(mut self, lookup: VarLookup) -> Self {
        self.lookup = lookup;
        self
    }
}

impl fmt::Debug for EnvCredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvCredentialSource")
            .field("direct", &self.direct.as_ref().map(|_| "***"))
            .field("env_var", &self.env_var)
            .finish_non_exhaustive()
    }
}

impl CredentialSource for EnvCredentialSource {
    fn api_key(&self) -> Result<ApiKey, DomainError> {
        if let Some(direct) = &self.direct
            && !direct.trim().is_empty()
        {
            return ApiKey::try_new(direct.as_str(), "gemini.api_key");
        }
        let raw = (self.lookup)(&self.env_var).unwrap_or_default();
        ApiKey::try_new(raw, &self.env_var)
    }
}
