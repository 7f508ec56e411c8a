//! Shared utilities: input validation and seed selection.

pub mod seed;
pub mod validation;

pub use seed::seed_from_clock;
pub use validation::{validate_inputs, ValidationError};
