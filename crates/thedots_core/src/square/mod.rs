//! Axis-aligned square detection.
//!
//! # Responsibility
//! - Index a point set by x-coordinate.
//! - Enumerate every square whose four corners are all in the set.
//!
//! # Invariants
//! - Detection is a pure function of the input point set.
//! - Only squares with edges parallel to the axes are reported.

pub mod detect;
pub mod index;
