//! Progress notification port
//!
//! Defines the interface for reporting progress while a request is in flight.

use oneword_domain::{Answer, Question};

/// Callback for progress updates during answer fetching
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, log line, nothing).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called right before the outbound request is sent
    fn on_request_start(&self, question: &Question, backend: &str);

    /// Called when an answer was extracted
    fn on_answer(&self, answer: &Answer);

    /// Called when the call failed, with the caller-facing message
    fn on_failure(&self, message: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgressNotifier for NoProgress {
    fn on_request_start(&self, _question: &Question, _backend: &str) {}
    fn on_answer(&self, _answer: &Answer) {}
    fn on_failure(&self, _message: &str) {}
}
