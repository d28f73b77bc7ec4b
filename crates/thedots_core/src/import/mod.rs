//! Bulk point import.
//!
//! # Responsibility
//! - Turn raw text lines into validated, deduplicated, capacity-bounded
//!   point batches.
//! - Report every class of rejected input as a deduplicated warning.
//!
//! # Invariants
//! - Batch import never fails on bad input; only store errors propagate.
//! - Nothing is persisted before the final batch write.

pub mod parser;
pub mod pipeline;
