// src/repositories/actor_repository.rs
//
// Actor persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Actor, NewActor};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ActorRepository: Send + Sync {
    /// Insert an actor and return the store-generated id
    fn create(&self, actor: &NewActor) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Actor>>;
    fn list_all(&self) -> AppResult<Vec<Actor>>;
    fn list_by_movie(&self, movie_id: i64) -> AppResult<Vec<Actor>>;
    fn update(&self, actor: &Actor) -> AppResult<bool>;
    fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteActorRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteActorRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_actor(row: &Row) -> Result<Actor, rusqlite::Error> {
        let birthday_str: String = row.get("birthday")?;
        let birthday = NaiveDate::parse_from_str(&birthday_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Actor {
            id: row.get("id")?,
            name: row.get("name")?,
            gender: row.get("gender")?,
            birthday,
        })
    }
}

impl ActorRepository for SqliteActorRepository {
    fn create(&self, actor: &NewActor) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO actor (name, gender, birthday) VALUES (?1, ?2, ?3)",
            params![
                actor.name,
                actor.gender,
                actor.birthday.format("%Y-%m-%d").to_string(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Actor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name, gender, birthday FROM actor WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_actor) {
            Ok(actor) => Ok(Some(actor)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Actor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name, gender, birthday FROM actor ORDER BY name")?;

        let actors: Vec<Actor> = stmt
            .query_map([], Self::row_to_actor)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn list_by_movie(&self, movie_id: i64) -> AppResult<Vec<Actor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT a.id, a.name, a.gender, a.birthday
             FROM actor a
             INNER JOIN movie_actor ma ON ma.actor_id = a.id
             WHERE ma.movie_id = ?1
             ORDER BY a.name",
        )?;

        let actors: Vec<Actor> = stmt
            .query_map(params![movie_id], Self::row_to_actor)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn update(&self, actor: &Actor) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let updated = conn.execute(
            "UPDATE actor
             SET name = ?2, gender = ?3, birthday = ?4
             WHERE id = ?1",
            params![
                actor.id,
                actor.name,
                actor.gender,
                actor.birthday.format("%Y-%m-%d").to_string(),
            ],
        )?;

        Ok(updated == 1)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let deleted = conn.execute("DELETE FROM actor WHERE id = ?1", params![id])?;

        Ok(deleted == 1)
    }
}
