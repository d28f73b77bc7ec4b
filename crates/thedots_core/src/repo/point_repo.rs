//! Point repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist points per list and answer existence/count queries.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `find_by_list` returns points in insertion order.
//! - `save_all` writes the whole batch or nothing.

use crate::model::point::Point;
use crate::model::validation::Validate;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const POINT_SELECT_SQL: &str = "SELECT point_id, list_id, x, y FROM points";

/// Storage-assigned point row id.
pub type PointId = i64;

/// A persisted point together with its storage id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPoint {
    pub id: PointId,
    pub point: Point,
}

/// Store contract for list-scoped points.
pub trait PointRepository {
    /// Persists one point.
    fn save(&self, point: &Point) -> RepoResult<PointId>;
    /// Persists a batch of points in one call.
    fn save_all(&self, points: &[Point]) -> RepoResult<()>;
    /// Returns all points of a list in insertion order.
    fn find_by_list(&self, list_id: &str) -> RepoResult<Vec<Point>>;
    /// Returns one page of a list's points in insertion order.
    fn find_by_list_page(
        &self,
        list_id: &str,
        page_index: u32,
        page_size: u32,
    ) -> RepoResult<Vec<Point>>;
    /// Returns all points of a list with their storage ids.
    fn find_records_by_list(&self, list_id: &str) -> RepoResult<Vec<StoredPoint>>;
    /// Whether the exact `(x, y, list_id)` tuple is stored.
    fn exists(&self, point: &Point) -> RepoResult<bool>;
    fn count_by_list(&self, list_id: &str) -> RepoResult<u64>;
    /// Removes every point of a list; returns removed row count.
    fn delete_by_list(&self, list_id: &str) -> RepoResult<usize>;
    /// Removes one point by storage id.
    fn delete_by_id(&self, id: PointId) -> RepoResult<()>;
}

impl<T: PointRepository + ?Sized> PointRepository for &T {
    fn save(&self, point: &Point) -> RepoResult<PointId> {
        (**self).save(point)
    }

    fn save_all(&self, points: &[Point]) -> RepoResult<()> {
        (**self).save_all(points)
    }

    fn find_by_list(&self, list_id: &str) -> RepoResult<Vec<Point>> {
        (**self).find_by_list(list_id)
    }

    fn find_by_list_page(
        &self,
        list_id: &str,
        page_index: u32,
        page_size: u32,
    ) -> RepoResult<Vec<Point>> {
        (**self).find_by_list_page(list_id, page_index, page_size)
    }

    fn find_records_by_list(&self, list_id: &str) -> RepoResult<Vec<StoredPoint>> {
        (**self).find_records_by_list(list_id)
    }

    fn exists(&self, point: &Point) -> RepoResult<bool> {
        (**self).exists(point)
    }

    fn count_by_list(&self, list_id: &str) -> RepoResult<u64> {
        (**self).count_by_list(list_id)
    }

    fn delete_by_list(&self, list_id: &str) -> RepoResult<usize> {
        (**self).delete_by_list(list_id)
    }

    fn delete_by_id(&self, id: PointId) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }
}

/// SQLite-backed point repository.
pub struct SqlitePointRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePointRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "points")?;
        Ok(Self { conn })
    }
}

impl PointRepository for SqlitePointRepository<'_> {
    fn save(&self, point: &Point) -> RepoResult<PointId> {
        point.validate()?;
        insert_point(self.conn, point)
    }

    fn save_all(&self, points: &[Point]) -> RepoResult<()> {
        if points.is_empty() {
            return Ok(());
        }
        for point in points {
            point.validate()?;
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        for point in points {
            insert_point(&tx, point)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn find_by_list(&self, list_id: &str) -> RepoResult<Vec<Point>> {
        Ok(self
            .find_records_by_list(list_id)?
            .into_iter()
            .map(|record| record.point)
            .collect())
    }

    fn find_by_list_page(
        &self,
        list_id: &str,
        page_index: u32,
        page_size: u32,
    ) -> RepoResult<Vec<Point>> {
        let offset = i64::from(page_index) * i64::from(page_size);
        let mut stmt = self.conn.prepare(&format!(
            "{POINT_SELECT_SQL}
             WHERE list_id = ?1
             ORDER BY point_id ASC
             LIMIT ?2 OFFSET ?3;"
        ))?;
        let mut rows = stmt.query(params![list_id, i64::from(page_size), offset])?;
        let mut points = Vec::new();
        while let Some(row) = rows.next()? {
            points.push(parse_point_row(row)?.point);
        }
        Ok(points)
    }

    fn find_records_by_list(&self, list_id: &str) -> RepoResult<Vec<StoredPoint>> {
        let mut stmt = self.conn.prepare(&format!(
            "{POINT_SELECT_SQL}
             WHERE list_id = ?1
             ORDER BY point_id ASC;"
        ))?;
        let mut rows = stmt.query([list_id])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_point_row(row)?);
        }
        Ok(records)
    }

    fn exists(&self, point: &Point) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM points WHERE list_id = ?1 AND x = ?2 AND y = ?3
            );",
            params![point.list_id(), point.x(), point.y()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn count_by_list(&self, list_id: &str) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM points WHERE list_id = ?1;",
            [list_id],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative point count `{count}`")))
    }

    fn delete_by_list(&self, list_id: &str) -> RepoResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM points WHERE list_id = ?1;", [list_id])?;
        Ok(removed)
    }

    fn delete_by_id(&self, id: PointId) -> RepoResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM points WHERE point_id = ?1;", [id])?;
        if removed == 0 {
            return Err(RepoError::NotFound(format!("point {id}")));
        }
        Ok(())
    }
}

fn insert_point(conn: &Connection, point: &Point) -> RepoResult<PointId> {
    conn.execute(
        "INSERT INTO points (list_id, x, y) VALUES (?1, ?2, ?3);",
        params![point.list_id(), point.x(), point.y()],
    )?;
    Ok(conn.last_insert_rowid())
}

fn parse_point_row(row: &Row<'_>) -> RepoResult<StoredPoint> {
    let id: PointId = row.get("point_id")?;
    let x = parse_coordinate(row.get("x")?, "x")?;
    let y = parse_coordinate(row.get("y")?, "y")?;
    let point = Point::new(x, y, row.get::<_, String>("list_id")?);
    point
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("point {id}: {err}")))?;
    Ok(StoredPoint { id, point })
}

fn parse_coordinate(value: i64, column: &'static str) -> RepoResult<i32> {
    i32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid value `{value}` in points.{column}")))
}
