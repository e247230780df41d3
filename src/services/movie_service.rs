// src/services/movie_service.rs

use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use crate::domain::movie::{validate_movie, validate_rate, Movie, MovieRecord, NewMovie};
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;

pub struct MovieService {
    movies: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub fn create_movie(&self, draft: NewMovie) -> AppResult<MovieRecord> {
        validate_movie(&draft).map_err(AppError::Domain)?;

        let id = self.movies.create(&draft)?;
        debug!("created movie {} ({})", id, draft.title);

        Ok(draft.into_record(id))
    }

    /// The full aggregate, children populated and deduplicated
    pub fn get_movie(&self, id: i64) -> AppResult<Option<Movie>> {
        self.movies.get_movie(id)
    }

    /// Scalar fields only, no child collections
    pub fn get_movie_record(&self, id: i64) -> AppResult<Option<MovieRecord>> {
        self.movies.get_record(id)
    }

    pub fn list_all_movies(&self) -> AppResult<Vec<MovieRecord>> {
        self.movies.list_all()
    }

    pub fn list_movies_by_actor(&self, actor_id: i64) -> AppResult<Vec<MovieRecord>> {
        self.movies.list_by_actor(actor_id)
    }

    pub fn list_movies_by_genre(&self, genre_id: i64) -> AppResult<Vec<MovieRecord>> {
        self.movies.list_by_genre(genre_id)
    }

    /// Only release date and rating are mutable after creation
    pub fn update_movie(&self, id: i64, release_date: NaiveDate, rate: i32) -> AppResult<bool> {
        validate_rate(rate).map_err(AppError::Domain)?;

        if self.movies.get_record(id)?.is_none() {
            return Err(AppError::NotFound);
        }

        self.movies.update(id, release_date, rate)
    }

    pub fn delete_movie(&self, id: i64) -> AppResult<bool> {
        if self.movies.get_record(id)?.is_none() {
            return Err(AppError::NotFound);
        }

        debug!("deleting movie {}", id);
        self.movies.delete(id)
    }
}
