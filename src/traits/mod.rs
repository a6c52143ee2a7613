//! Traits used as bounds across the crate.

mod number;

pub use number::*;
