//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod prompt_result_service;
mod prompt_template_service;
mod question_service;
mod run_service;

pub use prompt_result_service::PromptResultService;
pub use prompt_template_service::PromptTemplateService;
pub use question_service::QuestionService;
pub use run_service::RunService;
