//! Square lookup over stored lists.

use crate::model::square::Square;
use crate::repo::point_repo::PointRepository;
use crate::repo::RepoResult;
use crate::square::detect::find_squares;
use log::info;
use std::time::Instant;

/// Runs square detection against a list's stored points.
pub struct SquareService<R: PointRepository> {
    repo: R,
}

impl<R: PointRepository> SquareService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every axis-aligned square formed by the list's points.
    pub fn find_squares(&self, list_id: &str) -> RepoResult<Vec<Square>> {
        let started_at = Instant::now();
        let points = self.repo.find_by_list(list_id)?;
        let squares = find_squares(&points);
        info!(
            "event=squares_find module=service status=ok list_id={} points={} squares={} duration_ms={}",
            list_id,
            points.len(),
            squares.len(),
            started_at.elapsed().as_millis()
        );
        Ok(squares)
    }
}
