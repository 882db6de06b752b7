//! PostgreSQL Repository Implementations

mod prompt_result_repository;
mod prompt_template_repository;
mod question_repository;

pub use prompt_result_repository::PgPromptResultRepository;
pub use prompt_template_repository::PgPromptTemplateRepository;
pub use question_repository::PgQuestionRepository;
