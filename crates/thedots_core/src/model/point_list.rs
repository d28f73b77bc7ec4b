//! Named point list model.

use crate::model::validation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, isolated collection of points.
///
/// `name` is unique across lists; saving a list under an existing name
/// replaces the old list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointList {
    /// Stable list id referenced by `Point::list_id`.
    pub id: String,
    /// Display name, required and unique.
    pub name: String,
}

impl PointList {
    /// Creates a list with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Creates a list with a caller-provided id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Validate for PointList {
    fn violations(&self) -> Vec<ValidationError> {
        let mut violations = Vec::new();
        if self.id.trim().is_empty() {
            violations.push(ValidationError::new("id", "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            violations.push(ValidationError::new("name", "name must not be blank"));
        }
        violations
    }
}
