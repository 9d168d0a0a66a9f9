//! Configuration validation
//!
//! Validates threshold configuration for correctness before execution.

mod validator;

#[cfg(test)]
mod proptests;

pub use validator::{validate_config, validate_threshold};
