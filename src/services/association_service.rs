// src/services/association_service.rs
//
// The association manager: existence-checked mutation of the
// Movie–Actor and Movie–Genre relations. One service covers both
// kinds; all state lives in the store, the service is stateless
// between calls.

use log::debug;
use std::sync::Arc;

use crate::domain::RelationKind;
use crate::error::{AppError, AppResult};
use crate::repositories::{
    ActorRepository, AssociationRepository, GenreRepository, MovieRepository,
};

/// Outcome of a link/unlink mutation.
///
/// Store faults stay on the error path; this only distinguishes "the
/// pair changed" from "the relation was already in the requested
/// state", which callers surface as success vs. conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Exactly one association row was inserted or deleted
    Applied,
    /// The pair was already present (link) or already absent (unlink)
    AlreadyInState,
}

pub struct AssociationService {
    movies: Arc<dyn MovieRepository>,
    actors: Arc<dyn ActorRepository>,
    genres: Arc<dyn GenreRepository>,
    links: Arc<dyn AssociationRepository>,
}

impl AssociationService {
    pub fn new(
        movies: Arc<dyn MovieRepository>,
        actors: Arc<dyn ActorRepository>,
        genres: Arc<dyn GenreRepository>,
        links: Arc<dyn AssociationRepository>,
    ) -> Self {
        Self {
            movies,
            actors,
            genres,
            links,
        }
    }

    /// Whether the pair is present. Never mutates.
    pub fn is_linked(&self, kind: RelationKind, movie_id: i64, other_id: i64) -> AppResult<bool> {
        self.links.exists(kind, movie_id, other_id)
    }

    /// Associate `other_id` with the movie.
    ///
    /// Both entities must exist (`AppError::NotFound` otherwise); a
    /// pair that is already present reports `AlreadyInState` without
    /// mutating.
    pub fn link(
        &self,
        kind: RelationKind,
        movie_id: i64,
        other_id: i64,
    ) -> AppResult<LinkOutcome> {
        self.ensure_pair_entities(kind, movie_id, other_id)?;

        if self.links.exists(kind, movie_id, other_id)? {
            return Ok(LinkOutcome::AlreadyInState);
        }

        // A racing insert can still land between the check and the
        // mutation; the join table's composite key turns that into a
        // zero-row insert instead of a duplicate pair.
        if self.links.insert(kind, movie_id, other_id)? {
            debug!("linked {} {} to movie {}", kind, other_id, movie_id);
            Ok(LinkOutcome::Applied)
        } else {
            Ok(LinkOutcome::AlreadyInState)
        }
    }

    /// Dissociate `other_id` from the movie.
    ///
    /// Both entities must exist; an absent pair reports
    /// `AlreadyInState` without mutating.
    pub fn unlink(
        &self,
        kind: RelationKind,
        movie_id: i64,
        other_id: i64,
    ) -> AppResult<LinkOutcome> {
        self.ensure_pair_entities(kind, movie_id, other_id)?;

        if !self.links.exists(kind, movie_id, other_id)? {
            return Ok(LinkOutcome::AlreadyInState);
        }

        if self.links.delete(kind, movie_id, other_id)? {
            debug!("unlinked {} {} from movie {}", kind, other_id, movie_id);
            Ok(LinkOutcome::Applied)
        } else {
            Ok(LinkOutcome::AlreadyInState)
        }
    }

    /// Both sides of the pair must refer to stored entities before
    /// any mutation is attempted
    fn ensure_pair_entities(
        &self,
        kind: RelationKind,
        movie_id: i64,
        other_id: i64,
    ) -> AppResult<()> {
        if self.movies.get_record(movie_id)?.is_none() {
            return Err(AppError::NotFound);
        }

        let other_present = match kind {
            RelationKind::Actor => self.actors.get_by_id(other_id)?.is_some(),
            RelationKind::Genre => self.genres.get_by_id(other_id)?.is_some(),
        };

        if !other_present {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
