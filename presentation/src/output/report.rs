//! Command results ready for rendering

use oneword_domain::Answer;
use serde::Serialize;

/// The result of one CLI command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandReport {
    Ask { question: String, answer: Answer },
    Fibonacci { n: u32, terms: Vec<u64> },
    Primes { input: Vec<i64>, primes: Vec<i64> },
    Hcf { input: Vec<i64>, hcf: u64 },
    Lcm { input: Vec<i64>, lcm: u64 },
}

/// A failed command, as rendered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Machine-readable kind, e.g. `rate_limit`
    pub kind: String,
    pub message: String,
}

impl ErrorReport {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
