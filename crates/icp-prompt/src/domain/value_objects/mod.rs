//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod model;
mod record_source;
mod tag;

pub use model::*;
pub use record_source::*;
pub use tag::*;
