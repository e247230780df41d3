// src/repositories/association_repository.rs
//
// Movie association persistence
//
// One implementation covers both join tables; the relation kind
// selects the table and the non-movie column. A pair has no identity
// of its own: existence is judged solely by its presence in the
// table, and the composite primary key guarantees at most one row
// per pair.

use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::RelationKind;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait AssociationRepository: Send + Sync {
    /// Whether the (movie, other) pair is present. Never mutates.
    fn exists(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool>;

    /// Insert the pair; true iff exactly one row was inserted.
    ///
    /// No pre-check is performed here; callers are expected to have
    /// verified both entities and the pair via `exists`. A pair that
    /// is already present affects zero rows and reports false, it is
    /// not a fault.
    fn insert(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool>;

    /// Delete the pair; true iff exactly one row was deleted.
    fn delete(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool>;
}

pub struct SqliteAssociationRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteAssociationRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl AssociationRepository for SqliteAssociationRepository {
    fn exists(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE movie_id = ?1 AND {} = ?2)",
            kind.table(),
            kind.other_column()
        );

        let present: bool = conn.query_row(&sql, params![movie_id, other_id], |row| row.get(0))?;

        Ok(present)
    }

    fn insert(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        // OR IGNORE: the composite primary key turns a duplicate
        // insert into a zero-row no-op instead of a constraint error
        let sql = format!(
            "INSERT OR IGNORE INTO {} (movie_id, {}) VALUES (?1, ?2)",
            kind.table(),
            kind.other_column()
        );

        let inserted = conn.execute(&sql, params![movie_id, other_id])?;

        Ok(inserted == 1)
    }

    fn delete(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let sql = format!(
            "DELETE FROM {} WHERE movie_id = ?1 AND {} = ?2",
            kind.table(),
            kind.other_column()
        );

        let deleted = conn.execute(&sql, params![movie_id, other_id])?;

        Ok(deleted == 1)
    }
}
