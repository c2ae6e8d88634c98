//! Build errors for the machine builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Machine configuration rejected with {} violation(s). Fix them before calling .build()", .0.len())]
    InvalidConfig(Vec<ConfigViolation>),
}
