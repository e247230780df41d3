// src/repositories/award_repository.rs
//
// Award persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Award, NewAward};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait AwardRepository: Send + Sync {
    /// Insert an award and return the store-generated id
    fn create(&self, award: &NewAward) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Award>>;
    fn list_all(&self) -> AppResult<Vec<Award>>;
    fn list_by_movie(&self, movie_id: i64) -> AppResult<Vec<Award>>;
    /// The owning movie never changes; only name and year are mutable
    fn update(&self, award: &Award) -> AppResult<bool>;
    fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteAwardRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteAwardRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_award(row: &Row) -> Result<Award, rusqlite::Error> {
        Ok(Award {
            id: row.get("id")?,
            name: row.get("name")?,
            year: row.get("year")?,
            movie_id: row.get("movie_id")?,
        })
    }
}

impl AwardRepository for SqliteAwardRepository {
    fn create(&self, award: &NewAward) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO award (name, year, movie_id) VALUES (?1, ?2, ?3)",
            params![award.name, award.year, award.movie_id],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Award>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name, year, movie_id FROM award WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_award) {
            Ok(award) => Ok(Some(award)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Award>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name, year, movie_id FROM award ORDER BY year, name")?;

        let awards: Vec<Award> = stmt
            .query_map([], Self::row_to_award)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(awards)
    }

    fn list_by_movie(&self, movie_id: i64) -> AppResult<Vec<Award>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, year, movie_id
             FROM award
             WHERE movie_id = ?1
             ORDER BY year, name",
        )?;

        let awards: Vec<Award> = stmt
            .query_map(params![movie_id], Self::row_to_award)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(awards)
    }

    fn update(&self, award: &Award) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let updated = conn.execute(
            "UPDATE award
             SET name = ?2, year = ?3
             WHERE id = ?1",
            params![award.id, award.name, award.year],
        )?;

        Ok(updated == 1)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let deleted = conn.execute("DELETE FROM award WHERE id = ?1", params![id])?;

        Ok(deleted == 1)
    }
}
