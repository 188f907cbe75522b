//! Gemini adapter
//!
//! - [`GeminiLlmGateway`]: [`LlmGateway`](oneword_application::LlmGateway)
//!   implementation over `reqwest`
//! - [`types`]: serde wire types for `generateContent`

mod gateway;
pub mod types;

pub use gateway::{GeminiLlmGateway, classify_status};
