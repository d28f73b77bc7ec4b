//! Field-level validation contract.
//!
//! Callers only rely on two facts: an empty violation list means the value
//! is valid, and the first violation is the representative error.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable message, also used verbatim as an import warning.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

/// Validation rules for a domain value.
pub trait Validate {
    /// Returns every violated rule, in field declaration order.
    fn violations(&self) -> Vec<ValidationError>;

    /// Returns the first violation, if any.
    fn validate(&self) -> Result<(), ValidationError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}
