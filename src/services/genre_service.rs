// src/services/genre_service.rs

use log::debug;
use std::sync::Arc;

use crate::domain::{validate_genre_name, Genre};
use crate::error::{AppError, AppResult};
use crate::repositories::GenreRepository;

pub struct GenreService {
    genres: Arc<dyn GenreRepository>,
}

impl GenreService {
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }

    /// Genre names are unique across the catalog; creation is
    /// refused when the name is already taken
    pub fn create_genre(&self, name: &str) -> AppResult<Genre> {
        validate_genre_name(name).map_err(AppError::Domain)?;

        if self.genres.get_by_name(name)?.is_some() {
            return Err(AppError::Conflict(format!(
                "Genre '{}' already exists",
                name
            )));
        }

        let id = self.genres.create(name)?;
        debug!("created genre {} ({})", id, name);

        Ok(Genre::new(id, name.to_string()))
    }

    pub fn get_genre(&self, id: i64) -> AppResult<Option<Genre>> {
        self.genres.get_by_id(id)
    }

    pub fn get_genre_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        self.genres.get_by_name(name)
    }

    pub fn list_all_genres(&self) -> AppResult<Vec<Genre>> {
        self.genres.list_all()
    }

    pub fn list_genres_for_movie(&self, movie_id: i64) -> AppResult<Vec<Genre>> {
        self.genres.list_by_movie(movie_id)
    }

    pub fn update_genre(&self, genre: &Genre) -> AppResult<bool> {
        validate_genre_name(&genre.name).map_err(AppError::Domain)?;
        self.genres.update(genre)
    }

    pub fn delete_genre(&self, id: i64) -> AppResult<bool> {
        if self.genres.get_by_id(id)?.is_none() {
            return Err(AppError::NotFound);
        }

        self.genres.delete(id)
    }
}
