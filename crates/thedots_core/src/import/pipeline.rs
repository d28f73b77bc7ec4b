//! Import pipeline: parse, validate, dedup, trim to capacity, persist.
//!
//! # Invariants
//! - Each warning kind appears at most once per call (set keyed by message).
//! - Candidate order is first-seen order and is kept through truncation.
//! - Exactly one `save_all` call is made, after every check has run.
//!
//! The existing-point snapshot and the final write are not atomic. Two
//! concurrent imports into one list can both pass the duplicate and capacity
//! checks; callers that need strict limits must serialize imports per list.

use crate::import::parser::parse_point_line;
use crate::model::point::Point;
use crate::model::validation::Validate;
use crate::model::warning::{Warning, WarningSet};
use crate::repo::point_repo::PointRepository;
use crate::repo::RepoResult;
use log::{error, info};
use std::collections::HashSet;
use std::time::Instant;

pub const INCORRECT_FORMAT_WARNING: &str = "Found incorrectly formatted lines, ignoring";
pub const DUPLICATES_FOUND_WARNING: &str = "Found duplicates, only distinct ones will be preserved";

/// Warning text used when a batch is truncated to the list capacity.
pub fn list_size_exceeded_warning(capacity: u64) -> String {
    format!("New points exceeds list size limit of {capacity}, not all points will be imported")
}

/// Points that survived every check plus the warnings collected on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub points: Vec<Point>,
    pub warnings: WarningSet,
}

/// Runs every import check against a snapshot of the list's stored points.
///
/// Pure: performs no I/O. `existing` is the full stored point set of
/// `list_id`; its length is the stored count used for capacity checks.
pub fn plan_import<I, S>(lines: I, list_id: &str, existing: &[Point], capacity: u64) -> ImportPlan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut warnings = WarningSet::new();
    let mut candidates = Vec::new();

    for line in lines {
        let point = match parse_point_line(line.as_ref(), list_id) {
            Ok(point) => point,
            Err(_) => {
                warnings.insert(Warning::new(INCORRECT_FORMAT_WARNING));
                continue;
            }
        };
        if let Err(violation) = point.validate() {
            warnings.insert(Warning::new(violation.message));
            continue;
        }
        candidates.push(point);
    }

    let parsed_count = candidates.len();
    let stored: HashSet<&Point> = existing.iter().collect();
    let mut seen: HashSet<Point> = HashSet::with_capacity(parsed_count);
    candidates.retain(|point| !stored.contains(point) && seen.insert(point.clone()));
    if candidates.len() != parsed_count {
        warnings.insert(Warning::new(DUPLICATES_FOUND_WARNING));
    }

    let existing_count = existing.len() as u64;
    if candidates.len() as u64 + existing_count > capacity {
        let remaining = capacity.saturating_sub(existing_count);
        candidates.truncate(usize::try_from(remaining).unwrap_or(usize::MAX));
        warnings.insert(Warning::new(list_size_exceeded_warning(capacity)));
    }

    ImportPlan {
        points: candidates,
        warnings,
    }
}

/// Bulk importer bound to a point store.
pub struct ImportPipeline<R: PointRepository> {
    repo: R,
}

impl<R: PointRepository> ImportPipeline<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Imports `lines` into `list_id`, keeping the list at most `capacity`
    /// points large.
    ///
    /// # Errors
    /// - Only store failures; malformed, invalid, duplicate and overflowing
    ///   input is reported through the returned warnings.
    pub fn import<I, S>(&self, lines: I, list_id: &str, capacity: u64) -> RepoResult<WarningSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started_at = Instant::now();
        let existing = self.repo.find_by_list(list_id)?;
        let plan = plan_import(lines, list_id, &existing, capacity);

        if let Err(err) = self.repo.save_all(&plan.points) {
            error!(
                "event=points_import module=import status=error list_id={} duration_ms={} error={}",
                list_id,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }

        info!(
            "event=points_import module=import status=ok list_id={} existing={} imported={} warnings={} duration_ms={}",
            list_id,
            existing.len(),
            plan.points.len(),
            plan.warnings.len(),
            started_at.elapsed().as_millis()
        );
        Ok(plan.warnings)
    }
}
