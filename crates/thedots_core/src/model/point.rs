//! Point domain model.
//!
//! # Invariants
//! - `x` and `y` lie within `[COORDINATE_MIN, COORDINATE_MAX]` once validated.
//! - `list_id` is non-empty once validated.
//! - Equality and ordering cover `x`, `y` and `list_id`; the list id is part
//!   of identity so lists stay isolated from each other.

use crate::model::validation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Smallest accepted coordinate value.
pub const COORDINATE_MIN: i32 = -5000;
/// Largest accepted coordinate value.
pub const COORDINATE_MAX: i32 = 5000;

/// Immutable 2-D integer point bound to one list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
    list_id: String,
}

impl Point {
    /// Creates a point without validating it.
    ///
    /// Parsers and square construction produce candidates this way; callers
    /// that persist points must run `validate()` first.
    pub fn new(x: i32, y: i32, list_id: impl Into<String>) -> Self {
        Self {
            x,
            y,
            list_id: list_id.into(),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Returns a copy of this point moved horizontally to `x`.
    pub fn with_x(&self, x: i32) -> Self {
        Self::new(x, self.y, self.list_id.clone())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.list_id == other.list_id
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.list_id.hash(state);
    }
}

impl Ord for Point {
    /// Orders by `x`, then `y`; `list_id` only breaks remaining ties so the
    /// order stays consistent with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.list_id.cmp(&other.list_id))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Validate for Point {
    fn violations(&self) -> Vec<ValidationError> {
        let mut violations = Vec::new();
        if !coordinate_in_range(self.x) {
            violations.push(range_violation("x"));
        }
        if !coordinate_in_range(self.y) {
            violations.push(range_violation("y"));
        }
        if self.list_id.is_empty() {
            violations.push(ValidationError::new("list_id", "list_id must not be empty"));
        }
        violations
    }
}

fn coordinate_in_range(value: i32) -> bool {
    (COORDINATE_MIN..=COORDINATE_MAX).contains(&value)
}

fn range_violation(field: &'static str) -> ValidationError {
    ValidationError::new(
        field,
        format!("{field} must be between {COORDINATE_MIN} and {COORDINATE_MAX}"),
    )
}
