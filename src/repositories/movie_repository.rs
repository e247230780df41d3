// src/repositories/movie_repository.rs
//
// Movie persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::movie::{assemble_movie, JoinRow, Movie, MovieRecord, NewMovie};
use crate::domain::{Actor, Award, Genre};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// Insert a movie and return the store-generated id
    fn create(&self, movie: &NewMovie) -> AppResult<i64>;
    /// Scalar columns only, no child collections
    fn get_record(&self, id: i64) -> AppResult<Option<MovieRecord>>;
    /// The full aggregate: one join round trip, folded client-side
    fn get_movie(&self, id: i64) -> AppResult<Option<Movie>>;
    fn list_all(&self) -> AppResult<Vec<MovieRecord>>;
    fn list_by_actor(&self, actor_id: i64) -> AppResult<Vec<MovieRecord>>;
    fn list_by_genre(&self, genre_id: i64) -> AppResult<Vec<MovieRecord>>;
    /// Only release date and rating are mutable after creation
    fn update(&self, id: i64, release_date: NaiveDate, rate: i32) -> AppResult<bool>;
    fn delete(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

/// One row per (genre, actor, award) combination; child columns are
/// NULL where a relation has no matches.
const DETAILS_SQL: &str = "
    SELECT m.id AS movie_id, m.title, m.director, m.duration, m.release_date, m.rate,
           g.id AS genre_id, g.name AS genre_name,
           a.id AS actor_id, a.name AS actor_name,
           a.gender AS actor_gender, a.birthday AS actor_birthday,
           aw.id AS award_id, aw.name AS award_name,
           aw.year AS award_year, aw.movie_id AS award_movie_id
    FROM movie m
    LEFT JOIN movie_genre mg ON mg.movie_id = m.id
    LEFT JOIN genre g ON g.id = mg.genre_id
    LEFT JOIN movie_actor ma ON ma.movie_id = m.id
    LEFT JOIN actor a ON a.id = ma.actor_id
    LEFT JOIN award aw ON aw.movie_id = m.id
    WHERE m.id = ?1";

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn parse_date(s: &str) -> Result<NaiveDate, rusqlite::Error> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }

    /// Map database row to MovieRecord - returns rusqlite::Error for
    /// query_map compatibility
    fn row_to_record(row: &Row) -> Result<MovieRecord, rusqlite::Error> {
        let duration: i64 = row.get("duration")?;
        let release_date_str: String = row.get("release_date")?;

        Ok(MovieRecord {
            id: row.get("id")?,
            title: row.get("title")?,
            director: row.get("director")?,
            duration: duration as u32,
            release_date: Self::parse_date(&release_date_str)?,
            rate: row.get("rate")?,
        })
    }

    /// Map one row of the details join, including the nullable
    /// genre/actor/award columns
    fn row_to_join_row(row: &Row) -> Result<JoinRow, rusqlite::Error> {
        let duration: i64 = row.get("duration")?;
        let release_date_str: String = row.get("release_date")?;

        let movie = MovieRecord {
            id: row.get("movie_id")?,
            title: row.get("title")?,
            director: row.get("director")?,
            duration: duration as u32,
            release_date: Self::parse_date(&release_date_str)?,
            rate: row.get("rate")?,
        };

        let genre = match row.get::<_, Option<i64>>("genre_id")? {
            Some(id) => Some(Genre {
                id,
                name: row.get("genre_name")?,
            }),
            None => None,
        };

        let actor = match row.get::<_, Option<i64>>("actor_id")? {
            Some(id) => {
                let birthday_str: String = row.get("actor_birthday")?;
                Some(Actor {
                    id,
                    name: row.get("actor_name")?,
                    gender: row.get("actor_gender")?,
                    birthday: Self::parse_date(&birthday_str)?,
                })
            }
            None => None,
        };

        let award = match row.get::<_, Option<i64>>("award_id")? {
            Some(id) => Some(Award {
                id,
                name: row.get("award_name")?,
                year: row.get("award_year")?,
                movie_id: row.get("award_movie_id")?,
            }),
            None => None,
        };

        Ok(JoinRow {
            movie,
            genre,
            actor,
            award,
        })
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn create(&self, movie: &NewMovie) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO movie (title, director, duration, release_date, rate)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                movie.title,
                movie.director,
                movie.duration as i64,
                movie.release_date.format("%Y-%m-%d").to_string(),
                movie.rate,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_record(&self, id: i64) -> AppResult<Option<MovieRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, director, duration, release_date, rate
             FROM movie WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_record) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_movie(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(DETAILS_SQL)?;

        let rows: Vec<JoinRow> = stmt
            .query_map(params![id], Self::row_to_join_row)?
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(assemble_movie(rows)?))
    }

    fn list_all(&self) -> AppResult<Vec<MovieRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, director, duration, release_date, rate
             FROM movie
             ORDER BY title",
        )?;

        let movies: Vec<MovieRecord> = stmt
            .query_map([], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn list_by_actor(&self, actor_id: i64) -> AppResult<Vec<MovieRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT m.id, m.title, m.director, m.duration, m.release_date, m.rate
             FROM movie m
             INNER JOIN movie_actor ma ON ma.movie_id = m.id
             WHERE ma.actor_id = ?1
             ORDER BY m.title",
        )?;

        let movies: Vec<MovieRecord> = stmt
            .query_map(params![actor_id], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn list_by_genre(&self, genre_id: i64) -> AppResult<Vec<MovieRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT m.id, m.title, m.director, m.duration, m.release_date, m.rate
             FROM movie m
             INNER JOIN movie_genre mg ON mg.movie_id = m.id
             WHERE mg.genre_id = ?1
             ORDER BY m.title",
        )?;

        let movies: Vec<MovieRecord> = stmt
            .query_map(params![genre_id], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn update(&self, id: i64, release_date: NaiveDate, rate: i32) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let updated = conn.execute(
            "UPDATE movie
             SET release_date = ?2, rate = ?3
             WHERE id = ?1",
            params![id, release_date.format("%Y-%m-%d").to_string(), rate],
        )?;

        Ok(updated == 1)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let deleted = conn.execute("DELETE FROM movie WHERE id = ?1", params![id])?;

        Ok(deleted == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_pool;
    use crate::domain::association::RelationKind;
    use crate::domain::{NewActor, NewAward};
    use crate::repositories::actor_repository::{ActorRepository, SqliteActorRepository};
    use crate::repositories::association_repository::{
        AssociationRepository, SqliteAssociationRepository,
    };
    use crate::repositories::award_repository::{AwardRepository, SqliteAwardRepository};
    use crate::repositories::genre_repository::{GenreRepository, SqliteGenreRepository};

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            director: "Chad Stahelski".to_string(),
            duration: 101,
            release_date: NaiveDate::from_ymd_opt(2014, 10, 29).unwrap(),
            rate: 91,
        }
    }

    #[test]
    fn test_create_and_get_record() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        let id = repo.create(&new_movie("John Wick")).unwrap();
        let record = repo.get_record(id).unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.title, "John Wick");
        assert_eq!(record.duration, 101);
        assert_eq!(
            record.release_date,
            NaiveDate::from_ymd_opt(2014, 10, 29).unwrap()
        );
    }

    #[test]
    fn test_get_record_missing_is_none() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        assert!(repo.get_record(999).unwrap().is_none());
    }

    #[test]
    fn test_update_only_touches_release_date_and_rate() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        let id = repo.create(&new_movie("John Wick")).unwrap();
        let new_date = NaiveDate::from_ymd_opt(2015, 2, 4).unwrap();

        assert!(repo.update(id, new_date, 88).unwrap());

        let record = repo.get_record(id).unwrap().unwrap();
        assert_eq!(record.title, "John Wick");
        assert_eq!(record.release_date, new_date);
        assert_eq!(record.rate, 88);
    }

    #[test]
    fn test_update_missing_reports_false() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        let date = NaiveDate::from_ymd_opt(2015, 2, 4).unwrap();
        assert!(!repo.update(999, date, 50).unwrap());
    }

    #[test]
    fn test_delete_round_trip() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        let id = repo.create(&new_movie("John Wick")).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(repo.get_record(id).unwrap().is_none());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_get_movie_with_no_relations_has_empty_children() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        let id = repo.create(&new_movie("John Wick")).unwrap();
        let movie = repo.get_movie(id).unwrap().unwrap();

        assert_eq!(movie.id, id);
        assert!(movie.genres.is_empty());
        assert!(movie.actors.is_empty());
        assert!(movie.awards.is_empty());
    }

    #[test]
    fn test_get_movie_missing_is_none() {
        let (pool, _dir) = create_test_pool();
        let repo = SqliteMovieRepository::new(Arc::new(pool));

        assert!(repo.get_movie(999).unwrap().is_none());
    }

    #[test]
    fn test_get_movie_deduplicates_join_fan_out() {
        let (pool, _dir) = create_test_pool();
        let pool = Arc::new(pool);
        let movies = SqliteMovieRepository::new(pool.clone());
        let genres = SqliteGenreRepository::new(pool.clone());
        let actors = SqliteActorRepository::new(pool.clone());
        let awards = SqliteAwardRepository::new(pool.clone());
        let links = SqliteAssociationRepository::new(pool.clone());

        let movie_id = movies.create(&new_movie("John Wick")).unwrap();
        let action = genres.create("Action").unwrap();
        let thriller = genres.create("Thriller").unwrap();
        let keanu = actors
            .create(&NewActor {
                name: "Keanu Reeves".to_string(),
                gender: "Male".to_string(),
                birthday: NaiveDate::from_ymd_opt(1964, 9, 2).unwrap(),
            })
            .unwrap();

        assert!(links.insert(RelationKind::Genre, movie_id, action).unwrap());
        assert!(links.insert(RelationKind::Genre, movie_id, thriller).unwrap());
        assert!(links.insert(RelationKind::Actor, movie_id, keanu).unwrap());

        // 2 genres x 1 actor, no awards: the join returns 2 rows but
        // the aggregate must not double anything
        let movie = movies.get_movie(movie_id).unwrap().unwrap();
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.actors.len(), 1);
        assert!(movie.awards.is_empty());
        assert_eq!(movie.actors[0].name, "Keanu Reeves");

        // Adding awards multiplies the fan-out further
        awards
            .create(&NewAward {
                name: "Best Stunts".to_string(),
                year: 2015,
                movie_id,
            })
            .unwrap();
        awards
            .create(&NewAward {
                name: "Best Sound".to_string(),
                year: 2015,
                movie_id,
            })
            .unwrap();

        let movie = movies.get_movie(movie_id).unwrap().unwrap();
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.actors.len(), 1);
        assert_eq!(movie.awards.len(), 2);
    }

    #[test]
    fn test_list_by_genre_and_actor() {
        let (pool, _dir) = create_test_pool();
        let pool = Arc::new(pool);
        let movies = SqliteMovieRepository::new(pool.clone());
        let genres = SqliteGenreRepository::new(pool.clone());
        let actors = SqliteActorRepository::new(pool.clone());
        let links = SqliteAssociationRepository::new(pool.clone());

        let wick = movies.create(&new_movie("John Wick")).unwrap();
        let matrix = movies.create(&new_movie("The Matrix")).unwrap();
        let action = genres.create("Action").unwrap();
        let keanu = actors
            .create(&NewActor {
                name: "Keanu Reeves".to_string(),
                gender: "Male".to_string(),
                birthday: NaiveDate::from_ymd_opt(1964, 9, 2).unwrap(),
            })
            .unwrap();

        links.insert(RelationKind::Genre, wick, action).unwrap();
        links.insert(RelationKind::Genre, matrix, action).unwrap();
        links.insert(RelationKind::Actor, wick, keanu).unwrap();

        let by_genre = movies.list_by_genre(action).unwrap();
        assert_eq!(by_genre.len(), 2);

        let by_actor = movies.list_by_actor(keanu).unwrap();
        assert_eq!(by_actor.len(), 1);
        assert_eq!(by_actor[0].id, wick);
    }
}
