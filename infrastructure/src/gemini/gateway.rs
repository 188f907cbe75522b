//! Gemini LLM gateway
//!
//! Implements the [`LlmGateway`] port over the Generative Language REST
//! API using a shared `reqwest::Client`.
//!
//! ```text
//! POST {base_url}/v1beta/models/{model}:generateContent?key={api_key}
//! Content-Type: application/json
//!
//! {"contents":[{"parts":[{"text":"..."}]}],
//!  "generationConfig":{"temperature":0.1,"maxOutputTokens":10}}
//! ```
//!
//! Status codes are classified before the body is read:
//!
//! | Outcome | [`GatewayError`] |
//! |---------|------------------|
//! | 429 | `RateLimited` |
//! | 401 / 403 | `Unauthorized` |
//! | other non-2xx | `RequestFailed` |
//! | client timeout | `Timeout` |
//! | no `candidates[0].content.parts[0].text` | `InvalidResponse` |

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use oneword_application::{GatewayError, GenerateRequest, LlmGateway};
use oneword_domain::ApiKey;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

/// Gateway that talks to the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiLlmGateway {
    /// Create a gateway for `model` served from `base_url`.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("oneword/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::RequestFailed(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    /// Build from the `[gemini]` config section.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, GatewayError> {
        Self::new(config.base_url.clone(), config.model.clone())
    }

    /// Full `generateContent` URL, without the key query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerateRequest,
    ) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::from(request);
        debug!(
            model = %self.model,
            timeout = ?request.params.timeout,
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.expose())])
            .header(CONTENT_TYPE, "application/json")
            .timeout(request.params.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if let Some(err) = classify_status(status) {
            warn!(status = status.as_u16(), "generateContent returned an error status");
            return Err(err);
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(classify_transport_error)?;

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(GatewayError::InvalidResponse)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Map an HTTP status onto the gateway taxonomy; `None` for success.
pub fn classify_status(status: StatusCode) -> Option<GatewayError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized {
            status: status.as_u16(),
        },
        other => GatewayError::RequestFailed(format!(
            "Request failed with status code {}",
            other.as_u16()
        )),
    })
}

/// Map a reqwest error, dropping the URL so the key query parameter
/// never reaches error messages.
fn classify_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::RequestFailed(err.without_url().to_string())
    }
}
