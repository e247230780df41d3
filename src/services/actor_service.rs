// src/services/actor_service.rs

use log::debug;
use std::sync::Arc;

use crate::domain::{validate_actor, Actor, NewActor};
use crate::error::{AppError, AppResult};
use crate::repositories::ActorRepository;

pub struct ActorService {
    actors: Arc<dyn ActorRepository>,
}

impl ActorService {
    pub fn new(actors: Arc<dyn ActorRepository>) -> Self {
        Self { actors }
    }

    pub fn create_actor(&self, draft: NewActor) -> AppResult<Actor> {
        validate_actor(&draft).map_err(AppError::Domain)?;

        let id = self.actors.create(&draft)?;
        debug!("created actor {} ({})", id, draft.name);

        Ok(Actor::new(id, draft.name, draft.gender, draft.birthday))
    }

    pub fn get_actor(&self, id: i64) -> AppResult<Option<Actor>> {
        self.actors.get_by_id(id)
    }

    pub fn list_all_actors(&self) -> AppResult<Vec<Actor>> {
        self.actors.list_all()
    }

    pub fn list_actors_for_movie(&self, movie_id: i64) -> AppResult<Vec<Actor>> {
        self.actors.list_by_movie(movie_id)
    }

    pub fn update_actor(&self, actor: &Actor) -> AppResult<bool> {
        self.actors.update(actor)
    }

    pub fn delete_actor(&self, id: i64) -> AppResult<bool> {
        if self.actors.get_by_id(id)?.is_none() {
            return Err(AppError::NotFound);
        }

        self.actors.delete(id)
    }
}
