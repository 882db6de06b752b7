//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Question: reusable ICP question with a tag
//! - PromptTemplate: named system prompt
//! - PromptResult: persisted completion for one domain
//! - DomainRecord / UserContext: transient imported data
//! - Run: request, per-domain tasks, progress and report

mod prompt_result;
mod prompt_template;
mod question;
mod record;
mod run;

pub use prompt_result::*;
pub use prompt_template::*;
pub use question::*;
pub use record::*;
pub use run::*;
