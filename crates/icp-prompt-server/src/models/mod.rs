//! API Data Models
//!
//! Request/response DTOs for the `/icp` routes.

mod catalog;
mod import;
mod prompt_template;
mod question;
mod result;
mod run;

pub use catalog::*;
pub use import::*;
pub use prompt_template::*;
pub use question::*;
pub use result::*;
pub use run::*;
