//! Service Ports
//!
//! Abstract interfaces for external services.

mod completion;
mod progress;

pub use completion::*;
pub use progress::*;
