//! Fetch Answer use case.
//!
//! Asks the generative-AI backend a question and reduces the reply to a
//! single word.
//!
//! The flow is strictly single-shot:
//! 1. Validate the [`Question`] (no request on failure)
//! 2. Resolve the [`ApiKey`](oneword_domain::ApiKey) from the
//!    [`CredentialSource`] (no request on failure)
//! 3. Send one prompt via [`LlmGateway::generate`]
//! 4. Extract the first word with [`Answer::from_reply`]
//!
//! There is no retry, no caching and no conversation state; callers own
//! any retry policy.

use crate::config::AnswerConfig;
use crate::ports::credentials::CredentialSource;
use crate::ports::llm_gateway::{GatewayError, GenerateRequest, LlmGateway};
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use oneword_domain::{Answer, ApiKey, DomainError, PromptTemplate, Question, preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced to callers of [`FetchAnswerUseCase`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchAnswerError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Configuration(String),

    #[error("AI service rate limit exceeded")]
    RateLimit,

    #[error("Invalid AI API key")]
    Auth,

    #[error("AI service timeout")]
    Timeout,

    #[error("AI service error: {0}")]
    Service(String),
}

/// Discriminant of [`FetchAnswerError`] for programmatic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAnswerErrorKind {
    InvalidInput,
    Configuration,
    RateLimit,
    Auth,
    Timeout,
    Service,
}

impl FetchAnswerErrorKind {
    /// Stable snake_case identifier used in rendered error reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Configuration => "configuration",
            Self::RateLimit => "rate_limit",
            Self::Auth => "auth",
            Self::Timeout => "timeout",
            Self::Service => "service",
        }
    }
}

impl FetchAnswerError {
    pub fn kind(&self) -> FetchAnswerErrorKind {
        match self {
            Self::InvalidInput(_) => FetchAnswerErrorKind::InvalidInput,
            Self::Configuration(_) => FetchAnswerErrorKind::Configuration,
            Self::RateLimit => FetchAnswerErrorKind::RateLimit,
            Self::Auth => FetchAnswerErrorKind::Auth,
            Self::Timeout => FetchAnswerErrorKind::Timeout,
            Self::Service(_) => FetchAnswerErrorKind::Service,
        }
    }
}

impl From<GatewayError> for FetchAnswerError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => Self::RateLimit,
            GatewayError::Unauthorized { .. } => Self::Auth,
            GatewayError::Timeout => Self::Timeout,
            GatewayError::InvalidResponse => {
                Self::Service(GatewayError::InvalidResponse.to_string())
            }
            GatewayError::RequestFailed(message) => Self::Service(message),
        }
    }
}

impl From<DomainError> for FetchAnswerError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidQuestion(message) => Self::InvalidInput(message),
            DomainError::MissingCredential(message) => Self::Configuration(message),
            DomainError::NoAnswerToken => Self::Service(DomainError::NoAnswerToken.to_string()),
        }
    }
}

/// Use case for fetching a single-word answer.
pub struct FetchAnswerUseCase {
    gateway: Arc<dyn LlmGateway>,
    credentials: Arc<dyn CredentialSource>,
    config: AnswerConfig,
}

impl Clone for FetchAnswerUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            credentials: self.credentials.clone(),
            config: self.config,
        }
    }
}

impl FetchAnswerUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            gateway,
            credentials,
            config: AnswerConfig::default(),
        }
    }

    /// Override the default generation parameters.
    pub fn with_config(mut self, config: AnswerConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch an answer without progress reporting.
    pub async fn execute(&self, question: &str) -> Result<Answer, FetchAnswerError> {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Fetch an answer with progress callbacks.
    ///
    /// Progress hooks fire only once a request is actually about to be sent.
    pub async fn execute_with_progress(
        &self,
        question: &str,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<Answer, FetchAnswerError> {
        let question = Question::try_new(question)?;
        let api_key = self.credentials.api_key()?;

        info!(
            "Fetching single-word answer from {}: {}",
            self.gateway.name(),
            preview(question.content(), 100)
        );

        let request =
            GenerateRequest::new(PromptTemplate::one_word(&question), self.config.generation);
        progress.on_request_start(&question, self.gateway.name());

        let result = self.send(&api_key, &request).await;
        match &result {
            Ok(answer) => {
                debug!("Extracted answer: {}", answer);
                progress.on_answer(answer);
            }
            Err(e) => {
                warn!("Answer fetch failed: {}", e);
                progress.on_failure(&e.to_string());
            }
        }
        result
    }

    async fn send(
        &self,
        api_key: &ApiKey,
        request: &GenerateRequest,
    ) -> Result<Answer, FetchAnswerError> {
        let reply = self.gateway.generate(api_key, request).await?;
        debug!("Raw reply ({} bytes)", reply.len());
        Ok(Answer::from_reply(&reply)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::credentials::StaticCredentialSource;
    use async_trait::async_trait;
    use oneword_domain::GenerationParams;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Gateway that returns a scripted outcome and records every request
    struct RecordingGateway {
        outcome: Result<String, GatewayError>,
        requests: Mutex<Vec<(String, GenerateRequest)>>,
    }

    impl RecordingGateway {
        fn replying(text: &str) -> Self {
            Self::with_outcome(Ok(text.to_string()))
        }

        fn failing(err: GatewayError) -> Self {
            Self::with_outcome(Err(err))
        }

        fn with_outcome(outcome: Result<String, GatewayError>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for RecordingGateway {
        async fn generate(
            &self,
            api_key: &ApiKey,
            request: &GenerateRequest,
        ) -> Result<String, GatewayError> {
            self.requests
                .lock()
                .unwrap()
                .push((api_key.expose().to_string(), request.clone()));
            self.outcome.clone()
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    /// Credential source counting how often it is consulted
    struct CountingCredentials {
        reads: AtomicUsize,
    }

    impl CredentialSource for CountingCredentials {
        fn api_key(&self) -> Result<ApiKey, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            ApiKey::try_new("counted-key", "TEST_KEY")
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl FetchProgressNotifier for RecordingProgress {
        fn on_request_start(&self, question: &Question, backend: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{backend}:{question}"));
        }

        fn on_answer(&self, answer: &Answer) {
            self.events.lock().unwrap().push(format!("answer:{answer}"));
        }

        fn on_failure(&self, message: &str) {
            self.events.lock().unwrap().push(format!("failure:{message}"));
        }
    }

    fn use_case(gateway: Arc<RecordingGateway>) -> FetchAnswerUseCase {
        FetchAnswerUseCase::new(gateway, Arc::new(StaticCredentialSource::new("test-key")))
    }

    #[tokio::test]
    async fn test_punctuation_is_stripped() {
        let gateway = Arc::new(RecordingGateway::replying("Paris."));
        let answer = use_case(gateway.clone())
            .execute("What is the capital of France?")
            .await
            .unwrap();
        assert_eq!(answer.as_str(), "Paris");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_multi_word_reply_yields_first_word() {
        let gateway = Arc::new(RecordingGateway::replying("blue sky today"));
        let answer = use_case(gateway).execute("Colour of the sky?").await.unwrap();
        assert_eq!(answer.as_str(), "blue");
    }

    #[tokio::test]
    async fn test_request_carries_prompt_params_and_key() {
        let gateway = Arc::new(RecordingGateway::replying("Four"));
        let params = GenerationParams::default().with_timeout(Duration::from_secs(3));
        use_case(gateway.clone())
            .with_config(AnswerConfig::new(params))
            .execute("What is 2 + 2?")
            .await
            .unwrap();

        let requests = gateway.requests.lock().unwrap();
        let (key, request) = &requests[0];
        assert_eq!(key, "test-key");
        assert_eq!(
            request.prompt,
            "Answer the following question with ONLY a single word, no punctuation, no explanation: What is 2 + 2?"
        );
        assert_eq!(request.params.temperature, 0.1);
        assert_eq!(request.params.max_output_tokens, 10);
        assert_eq!(request.params.timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_blank_question_fails_without_request() {
        let gateway = Arc::new(RecordingGateway::replying("unused"));
        let uc = use_case(gateway.clone());

        for question in ["", "   ", "\n\t "] {
            let err = uc.execute(question).await.unwrap_err();
            assert_eq!(err.kind(), FetchAnswerErrorKind::InvalidInput);
            assert_eq!(err.to_string(), "Question must be a non-empty string");
        }
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_configuration_fails_without_request() {
        let gateway = Arc::new(RecordingGateway::replying("unused"));
        let uc = FetchAnswerUseCase::new(
            gateway.clone(),
            Arc::new(StaticCredentialSource::missing("GEMINI_API_KEY")),
        );

        let err = uc.execute("Anything?").await.unwrap_err();
        assert_eq!(
            err,
            FetchAnswerError::Configuration("GEMINI_API_KEY not configured".to_string())
        );
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_checked_before_configuration() {
        let gateway = Arc::new(RecordingGateway::replying("unused"));
        let uc = FetchAnswerUseCase::new(
            gateway,
            Arc::new(StaticCredentialSource::missing("GEMINI_API_KEY")),
        );
        let err = uc.execute(" ").await.unwrap_err();
        assert_eq!(err.kind(), FetchAnswerErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_credentials_are_read_on_every_call() {
        let credentials = Arc::new(CountingCredentials {
            reads: AtomicUsize::new(0),
        });
        let uc = FetchAnswerUseCase::new(
            Arc::new(RecordingGateway::replying("Yes")),
            credentials.clone(),
        );

        uc.execute("One?").await.unwrap();
        uc.execute("Two?").await.unwrap();
        assert_eq!(credentials.reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_gateway_errors_map_to_taxonomy() {
        let cases = [
            (GatewayError::RateLimited, FetchAnswerError::RateLimit),
            (
                GatewayError::Unauthorized { status: 401 },
                FetchAnswerError::Auth,
            ),
            (
                GatewayError::Unauthorized { status: 403 },
                FetchAnswerError::Auth,
            ),
            (GatewayError::Timeout, FetchAnswerError::Timeout),
            (
                GatewayError::InvalidResponse,
                FetchAnswerError::Service("Invalid response from AI service".to_string()),
            ),
            (
                GatewayError::RequestFailed("HTTP 500 Internal Server Error".to_string()),
                FetchAnswerError::Service("HTTP 500 Internal Server Error".to_string()),
            ),
        ];

        for (gateway_err, expected) in cases {
            let gateway = Arc::new(RecordingGateway::failing(gateway_err));
            let err = use_case(gateway.clone()).execute("Q?").await.unwrap_err();
            assert_eq!(err, expected);
            assert_eq!(gateway.call_count(), 1, "no retries expected");
        }
    }

    #[tokio::test]
    async fn test_reply_without_word_is_service_error() {
        let gateway = Arc::new(RecordingGateway::replying(" ... "));
        let err = use_case(gateway).execute("Q?").await.unwrap_err();
        assert_eq!(err.kind(), FetchAnswerErrorKind::Service);
        assert_eq!(
            err.to_string(),
            "AI service error: Invalid response from AI service"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchAnswerError::RateLimit.to_string(),
            "AI service rate limit exceeded"
        );
        assert_eq!(FetchAnswerError::Auth.to_string(), "Invalid AI API key");
        assert_eq!(FetchAnswerError::Timeout.to_string(), "AI service timeout");
        assert_eq!(
            FetchAnswerError::Service("boom".to_string()).to_string(),
            "AI service error: boom"
        );
    }

    #[tokio::test]
    async fn test_progress_events() {
        let progress = RecordingProgress::default();
        let uc = use_case(Arc::new(RecordingGateway::replying("Paris.")));
        uc.execute_with_progress("Capital?", &progress).await.unwrap();
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start:recording:Capital?".to_string(), "answer:Paris".to_string()]
        );

        let progress = RecordingProgress::default();
        let uc = use_case(Arc::new(RecordingGateway::failing(GatewayError::Timeout)));
        uc.execute_with_progress("Capital?", &progress).await.unwrap_err();
        assert_eq!(
            progress.events.lock().unwrap().last().unwrap(),
            "failure:AI service timeout"
        );
    }

    #[tokio::test]
    async fn test_no_progress_when_input_invalid() {
        let progress = RecordingProgress::default();
        let uc = use_case(Arc::new(RecordingGateway::replying("x")));
        uc.execute_with_progress("", &progress).await.unwrap_err();
        assert!(progress.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(FetchAnswerError::RateLimit.kind().as_str(), "rate_limit");
        assert_eq!(
            FetchAnswerError::InvalidInput("x".into()).kind().as_str(),
            "invalid_input"
        );
        assert_eq!(FetchAnswerError::Service("x".into()).kind().as_str(), "service");
    }
}
