//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod prompt_result_repository;
mod prompt_template_repository;
mod question_repository;

pub use prompt_result_repository::*;
pub use prompt_template_repository::*;
pub use question_repository::*;
