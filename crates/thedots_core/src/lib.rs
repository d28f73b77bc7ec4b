//! Core domain logic for thedots: named point lists and the axis-aligned
//! squares found among their points.
//! This crate owns import rules, detection, and the SQLite-backed store.

pub mod config;
pub mod db;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod square;

pub use config::ListConfig;
pub use import::parser::{format_point_line, parse_point_line, FormatError};
pub use import::pipeline::{
    list_size_exceeded_warning, plan_import, ImportPipeline, ImportPlan,
    DUPLICATES_FOUND_WARNING, INCORRECT_FORMAT_WARNING,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::point::{Point, COORDINATE_MAX, COORDINATE_MIN};
pub use model::point_list::PointList;
pub use model::square::{Square, SquareVertex};
pub use model::validation::{Validate, ValidationError};
pub use model::warning::{Warning, WarningSet};
pub use repo::point_list_repo::{PointListRepository, SqlitePointListRepository};
pub use repo::point_repo::{PointId, PointRepository, SqlitePointRepository, StoredPoint};
pub use repo::{RepoError, RepoResult};
pub use service::point_list_service::{PointListService, PointListServiceError};
pub use service::point_service::{PointService, PointServiceError};
pub use service::square_service::SquareService;
pub use square::detect::{find_squares, find_squares_in};
pub use square::index::SquareIndex;

/// Minimal health-check API for smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
