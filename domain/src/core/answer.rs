//! Answer value object and single-word extraction

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Characters that terminate a word in addition to Unicode whitespace.
const WORD_SEPARATORS: &[char] = &[',', '.', '!', '?', ';', ':'];

/// A single word extracted from a model reply (Value Object)
///
/// Never empty, never contains whitespace or any of `, . ! ? ; :`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Answer(String);

impl Answer {
    /// Extract the first word of `reply`.
    ///
    /// Leading separators are skipped, so `"...Paris"` yields `"Paris"`.
    /// Fails with [`DomainError::NoAnswerToken`] when the reply holds no
    /// word at all (blank or punctuation only).
    pub fn from_reply(reply: &str) -> Result<Self, DomainError> {
        reply
            .trim()
            .split(is_separator)
            .find(|token| !token.is_empty())
            .map(|token| Self(token.to_string()))
            .ok_or(DomainError::NoAnswerToken)
    }

    /// Get the answer text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Answer {
    type Error = DomainError;

    /// Accepts only text that is already a single word.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let answer = Self::from_reply(&value)?;
        if answer.0 == value {
            Ok(answer)
        } else {
            Err(DomainError::NoAnswerToken)
        }
    }
}

impl From<Answer> for String {
    fn from(answer: Answer) -> Self {
        answer.0
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || WORD_SEPARATORS.contains(&c)
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Answer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
