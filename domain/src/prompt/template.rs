//! Prompt templates for single-word answers

use crate::core::question::Question;

/// Templates for generating prompts sent to the backend
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction prepended to every question
    pub fn one_word_instruction() -> &'static str {
        "Answer the following question with ONLY a single word, no punctuation, no explanation:"
    }

    /// User prompt for a single-word answer
    pub fn one_word(question: &Question) -> String {
        format!("{} {}", Self::one_word_instruction(), question.content())
    }
}
