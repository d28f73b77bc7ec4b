//! Point list repository contract and SQLite implementation.
//!
//! # Invariants
//! - List names are unique at the storage level.
//! - `save` inserts a new list or renames an existing one with the same id.
//! - `delete_with_points` removes a list row and its points in one transaction.

use crate::model::point_list::PointList;
use crate::model::validation::Validate;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const LIST_SELECT_SQL: &str = "SELECT list_id, name FROM point_lists";

/// Store contract for named point lists.
pub trait PointListRepository {
    fn save(&self, list: &PointList) -> RepoResult<()>;
    fn find_by_name(&self, name: &str) -> RepoResult<Option<PointList>>;
    fn find_by_id(&self, id: &str) -> RepoResult<Option<PointList>>;
    /// Returns every list ordered by name.
    fn find_all(&self) -> RepoResult<Vec<PointList>>;
    fn delete(&self, list: &PointList) -> RepoResult<()>;
    fn delete_by_id(&self, id: &str) -> RepoResult<()>;
    /// Removes the list and every point stored under its id atomically;
    /// returns the removed point count.
    ///
    /// Points under `id` are removed even when no list row exists, in which
    /// case `NotFound` is returned after the cleanup commits.
    fn delete_with_points(&self, id: &str) -> RepoResult<usize>;
}

/// SQLite-backed point list repository.
pub struct SqlitePointListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePointListRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "point_lists")?;
        ensure_connection_ready(conn, "points")?;
        Ok(Self { conn })
    }
}

impl PointListRepository for SqlitePointListRepository<'_> {
    fn save(&self, list: &PointList) -> RepoResult<()> {
        list.validate()?;
        self.conn.execute(
            "INSERT INTO point_lists (list_id, name) VALUES (?1, ?2)
             ON CONFLICT(list_id) DO UPDATE SET name = excluded.name;",
            params![list.id.as_str(), list.name.as_str()],
        )?;
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<PointList>> {
        self.find_one("name", name)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<PointList>> {
        self.find_one("list_id", id)
    }

    fn find_all(&self) -> RepoResult<Vec<PointList>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LIST_SELECT_SQL} ORDER BY name ASC, list_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();
        while let Some(row) = rows.next()? {
            lists.push(parse_list_row(row)?);
        }
        Ok(lists)
    }

    fn delete(&self, list: &PointList) -> RepoResult<()> {
        self.delete_by_id(&list.id)
    }

    fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM point_lists WHERE list_id = ?1;", [id])?;
        if removed == 0 {
            return Err(RepoError::NotFound(format!("point list {id}")));
        }
        Ok(())
    }

    fn delete_with_points(&self, id: &str) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let removed_points = tx.execute("DELETE FROM points WHERE list_id = ?1;", [id])?;
        let removed_lists = tx.execute("DELETE FROM point_lists WHERE list_id = ?1;", [id])?;
        tx.commit()?;

        if removed_lists == 0 {
            return Err(RepoError::NotFound(format!("point list {id}")));
        }
        Ok(removed_points)
    }
}

impl SqlitePointListRepository<'_> {
    fn find_one(&self, column: &'static str, value: &str) -> RepoResult<Option<PointList>> {
        let list = self
            .conn
            .query_row(
                &format!("{LIST_SELECT_SQL} WHERE {column} = ?1;"),
                [value],
                |row| Ok(parse_list_row(row)),
            )
            .optional()?;
        list.transpose()
    }
}

fn parse_list_row(row: &Row<'_>) -> RepoResult<PointList> {
    let list = PointList::with_id(
        row.get::<_, String>("list_id")?,
        row.get::<_, String>("name")?,
    );
    list.validate()
        .map_err(|err| RepoError::InvalidData(format!("point list `{}`: {err}", list.id)))?;
    Ok(list)
}
