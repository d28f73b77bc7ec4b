//! Point list use-case service.
//!
//! # Responsibility
//! - Create, look up and delete named lists.
//! - Run bulk imports and text exports of a list's points.
//!
//! # Invariants
//! - List names are unique: creating a list under a taken name replaces the
//!   old list, and drops its points unless the ids match.
//! - Deleting a list also deletes its points, in the same transaction.
//! - Points are only imported into lists that exist.

use crate::import::parser::format_point_line;
use crate::import::pipeline::ImportPipeline;
use crate::model::point_list::PointList;
use crate::model::validation::{Validate, ValidationError};
use crate::model::warning::WarningSet;
use crate::repo::point_list_repo::PointListRepository;
use crate::repo::point_repo::PointRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from list use-cases.
#[derive(Debug)]
pub enum PointListServiceError {
    /// List failed field validation; carries the first violation.
    Validation(ValidationError),
    /// Target list does not exist.
    ListNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PointListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "point list not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PointListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::ListNotFound(_) => None,
        }
    }
}

impl From<RepoError> for PointListServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// List service facade over point and list repositories.
pub struct PointListService<P: PointRepository, L: PointListRepository> {
    points: P,
    lists: L,
}

impl<P: PointRepository, L: PointListRepository> PointListService<P, L> {
    pub fn new(points: P, lists: L) -> Self {
        Self { points, lists }
    }

    /// Persists `list`, replacing any other list with the same name.
    pub fn create_list(&self, list: &PointList) -> Result<(), PointListServiceError> {
        list.validate().map_err(PointListServiceError::Validation)?;

        if let Some(previous) = self.lists.find_by_name(&list.name)? {
            let dropped_points = if previous.id != list.id {
                self.lists.delete_with_points(&previous.id)?
            } else {
                self.lists.delete(&previous)?;
                0
            };
            info!(
                "event=list_replace module=service status=ok previous_id={} list_id={} dropped_points={}",
                previous.id, list.id, dropped_points
            );
        }

        self.lists.save(list)?;
        info!(
            "event=list_create module=service status=ok list_id={}",
            list.id
        );
        Ok(())
    }

    pub fn get_list(&self, id: &str) -> Result<Option<PointList>, PointListServiceError> {
        Ok(self.lists.find_by_id(id)?)
    }

    pub fn find_list_by_name(&self, name: &str) -> Result<Option<PointList>, PointListServiceError> {
        Ok(self.lists.find_by_name(name)?)
    }

    /// Returns every list ordered by name.
    pub fn list_all(&self) -> Result<Vec<PointList>, PointListServiceError> {
        Ok(self.lists.find_all()?)
    }

    /// Deletes a list and all of its points.
    ///
    /// Returns `ListNotFound` for an unknown id; points stored under that id
    /// are still removed.
    pub fn delete_list(&self, id: &str) -> Result<(), PointListServiceError> {
        let removed = match self.lists.delete_with_points(id) {
            Ok(removed) => removed,
            Err(RepoError::NotFound(_)) => {
                return Err(PointListServiceError::ListNotFound(id.to_string()))
            }
            Err(other) => return Err(other.into()),
        };
        info!(
            "event=list_delete module=service status=ok list_id={} removed_points={}",
            id, removed
        );
        Ok(())
    }

    /// Bulk-imports text lines into `list_id`; see `ImportPipeline::import`.
    ///
    /// Returns `ListNotFound` without reading `lines` when the list does not
    /// exist.
    pub fn import_points<I, S>(
        &self,
        lines: I,
        list_id: &str,
        capacity: u64,
    ) -> Result<WarningSet, PointListServiceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.lists.find_by_id(list_id)?.is_none() {
            return Err(PointListServiceError::ListNotFound(list_id.to_string()));
        }
        Ok(ImportPipeline::new(&self.points).import(lines, list_id, capacity)?)
    }

    /// Renders the list's points as `x y` lines joined by `\n`, in insertion
    /// order. The output is accepted unchanged by `import_points`.
    pub fn export_points(&self, list_id: &str) -> Result<String, PointListServiceError> {
        let lines: Vec<String> = self
            .points
            .find_by_list(list_id)?
            .iter()
            .map(format_point_line)
            .collect();
        Ok(lines.join("\n"))
    }
}
