//! Import warnings.
//!
//! Warnings are keyed by message text. Two distinct failures that render the
//! same message collapse into one entry; this is accepted behavior.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of warnings produced by one import call, iterated in message order.
pub type WarningSet = BTreeSet<Warning>;

/// Non-fatal import diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Warning {
    message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
