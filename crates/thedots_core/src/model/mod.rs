//! Domain model for point lists and the squares derived from them.
//!
//! # Responsibility
//! - Define the canonical value types shared by import and detection.
//! - Own field-level validation rules (`Validate`).
//!
//! # Invariants
//! - A `Point` is identified by `(x, y, list_id)`, never by storage id.
//! - A `Square` is a derived view and is never persisted.

pub mod point;
pub mod point_list;
pub mod square;
pub mod validation;
pub mod warning;
