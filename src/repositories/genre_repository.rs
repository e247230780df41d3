// src/repositories/genre_repository.rs
//
// Genre persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Genre;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait GenreRepository: Send + Sync {
    /// Insert a genre and return the store-generated id
    fn create(&self, name: &str) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Genre>>;
    /// Backs the uniqueness check performed before creation
    fn get_by_name(&self, name: &str) -> AppResult<Option<Genre>>;
    fn list_all(&self) -> AppResult<Vec<Genre>>;
    fn list_by_movie(&self, movie_id: i64) -> AppResult<Vec<Genre>>;
    fn update(&self, genre: &Genre) -> AppResult<bool>;
    fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteGenreRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGenreRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_genre(row: &Row) -> Result<Genre, rusqlite::Error> {
        Ok(Genre {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}

impl GenreRepository for SqliteGenreRepository {
    fn create(&self, name: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute("INSERT INTO genre (name) VALUES (?1)", params![name])?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Genre>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name FROM genre WHERE id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_genre) {
            Ok(genre) => Ok(Some(genre)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name FROM genre WHERE name = ?1")?;

        match stmt.query_row(params![name], Self::row_to_genre) {
            Ok(genre) => Ok(Some(genre)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Genre>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name FROM genre ORDER BY name")?;

        let genres: Vec<Genre> = stmt
            .query_map([], Self::row_to_genre)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }

    fn list_by_movie(&self, movie_id: i64) -> AppResult<Vec<Genre>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT g.id, g.name
             FROM genre g
             INNER JOIN movie_genre mg ON mg.genre_id = g.id
             WHERE mg.movie_id = ?1
             ORDER BY g.name",
        )?;

        let genres: Vec<Genre> = stmt
            .query_map(params![movie_id], Self::row_to_genre)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }

    fn update(&self, genre: &Genre) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let updated = conn.execute(
            "UPDATE genre SET name = ?2 WHERE id = ?1",
            params![genre.id, genre.name],
        )?;

        Ok(updated == 1)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let deleted = conn.execute("DELETE FROM genre WHERE id = ?1", params![id])?;

        Ok(deleted == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_pool;

    #[test]
    fn test_create_and_lookup() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteGenreRepository::new(Arc::new(pool));

        let id = repo.create("Action").unwrap();

        let by_id = repo.get_by_id(id).unwrap().unwrap();
        assert_eq!(by_id.name, "Action");

        let by_name = repo.get_by_name("Action").unwrap().unwrap();
        assert_eq!(by_name.id, id);

        assert!(repo.get_by_name("Thriller").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_name_is_rejected_by_store() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteGenreRepository::new(Arc::new(pool));

        repo.create("Action").unwrap();
        assert!(repo.create("Action").is_err());
    }

    #[test]
    fn test_list_all_is_sorted_by_name() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteGenreRepository::new(Arc::new(pool));

        repo.create("Thriller").unwrap();
        repo.create("Action").unwrap();

        let all = repo.list_all().unwrap();
        let names: Vec<&str> = all.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Action", "Thriller"]);
    }

    #[test]
    fn test_update_and_delete() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteGenreRepository::new(Arc::new(pool));

        let id = repo.create("Actoin").unwrap();

        let fixed = Genre::new(id, "Action".to_string());
        assert!(repo.update(&fixed).unwrap());
        assert_eq!(repo.get_by_id(id).unwrap().unwrap().name, "Action");

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }
}
