//! Domain Services
//!
//! Pure functions operating on domain entities.

mod normalizer;

pub use normalizer::*;
