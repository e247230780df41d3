// src/services/award_service.rs

use log::debug;
use std::sync::Arc;

use crate::domain::{validate_award, Award, NewAward};
use crate::error::{AppError, AppResult};
use crate::repositories::{AwardRepository, MovieRepository};

pub struct AwardService {
    awards: Arc<dyn AwardRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl AwardService {
    pub fn new(awards: Arc<dyn AwardRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { awards, movies }
    }

    /// An award belongs to exactly one movie; that movie must exist
    /// at creation time
    pub fn create_award(&self, draft: NewAward) -> AppResult<Award> {
        validate_award(&draft).map_err(AppError::Domain)?;

        if self.movies.get_record(draft.movie_id)?.is_none() {
            return Err(AppError::NotFound);
        }

        let id = self.awards.create(&draft)?;
        debug!("created award {} for movie {}", id, draft.movie_id);

        Ok(Award::new(id, draft.name, draft.year, draft.movie_id))
    }

    pub fn get_award(&self, id: i64) -> AppResult<Option<Award>> {
        self.awards.get_by_id(id)
    }

    pub fn list_all_awards(&self) -> AppResult<Vec<Award>> {
        self.awards.list_all()
    }

    pub fn list_awards_for_movie(&self, movie_id: i64) -> AppResult<Vec<Award>> {
        self.awards.list_by_movie(movie_id)
    }

    /// The owning movie never changes; only name and year do
    pub fn update_award(&self, award: &Award) -> AppResult<bool> {
        self.awards.update(award)
    }

    pub fn delete_award(&self, id: i64) -> AppResult<bool> {
        if self.awards.get_by_id(id)?.is_none() {
            return Err(AppError::NotFound);
        }

        self.awards.delete(id)
    }
}
