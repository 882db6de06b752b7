//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod openai;
pub mod postgres;
pub mod progress;

// Re-exports
pub use openai::{OpenAiCompletion, OpenAiConfig};
pub use postgres::{PgPromptResultRepository, PgPromptTemplateRepository, PgQuestionRepository};
pub use progress::RunGate;
