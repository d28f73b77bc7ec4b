//! Single-point use-case service.
//!
//! # Responsibility
//! - Create one point as a direct user action: succeed or fail outright.
//! - Expose paged reads and deletion by storage id.
//!
//! # Invariants
//! - On any error nothing is persisted.
//! - Checks run in order: validation, duplicate, capacity.

use crate::model::point::Point;
use crate::model::validation::{Validate, ValidationError};
use crate::repo::point_repo::{PointId, PointRepository};
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from single-point operations.
#[derive(Debug)]
pub enum PointServiceError {
    /// Point failed field validation; carries the first violation.
    Validation(ValidationError),
    /// The exact `(x, y, list_id)` tuple is already stored.
    DuplicatePoint,
    /// The list already holds `limit` points.
    TooManyPoints { limit: u64 },
    /// No point with this storage id.
    PointNotFound(PointId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PointServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicatePoint => write!(f, "Duplicate Point provided"),
            Self::TooManyPoints { limit } => write!(
                f,
                "Too many points found in List, should not exceed the size of {limit}"
            ),
            Self::PointNotFound(id) => write!(f, "point not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PointServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PointServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Point service facade over a point repository.
pub struct PointService<R: PointRepository> {
    repo: R,
}

impl<R: PointRepository> PointService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores one point in its list.
    ///
    /// # Errors
    /// - `Validation` when coordinates are out of range or `list_id` is empty.
    /// - `DuplicatePoint` when the point is already stored.
    /// - `TooManyPoints` when storing it would exceed `limit`.
    pub fn create_point(&self, point: &Point, limit: u64) -> Result<PointId, PointServiceError> {
        point.validate().map_err(PointServiceError::Validation)?;

        if self.repo.exists(point)? {
            warn!(
                "event=point_create module=service status=rejected reason=duplicate list_id={}",
                point.list_id()
            );
            return Err(PointServiceError::DuplicatePoint);
        }

        let count = self.repo.count_by_list(point.list_id())?;
        if count >= limit {
            warn!(
                "event=point_create module=service status=rejected reason=capacity list_id={} count={} limit={}",
                point.list_id(),
                count,
                limit
            );
            return Err(PointServiceError::TooManyPoints { limit });
        }

        let id = self.repo.save(point)?;
        info!(
            "event=point_create module=service status=ok list_id={} point_id={}",
            point.list_id(),
            id
        );
        Ok(id)
    }

    /// Returns one page of a list's points in insertion order.
    pub fn list_points(
        &self,
        list_id: &str,
        page_index: u32,
        page_size: u32,
    ) -> Result<Vec<Point>, PointServiceError> {
        Ok(self.repo.find_by_list_page(list_id, page_index, page_size)?)
    }

    /// Removes one stored point.
    pub fn delete_point(&self, id: PointId) -> Result<(), PointServiceError> {
        match self.repo.delete_by_id(id) {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound(_)) => Err(PointServiceError::PointNotFound(id)),
            Err(other) => Err(other.into()),
        }
    }
}
