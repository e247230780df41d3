// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod actor_repository;
pub mod association_repository;
pub mod award_repository;
pub mod genre_repository;
pub mod movie_repository;

pub use actor_repository::{ActorRepository, SqliteActorRepository};
pub use association_repository::{AssociationRepository, SqliteAssociationRepository};
pub use award_repository::{AwardRepository, SqliteAwardRepository};
pub use genre_repository::{GenreRepository, SqliteGenreRepository};
pub use movie_repository::{MovieRepository, SqliteMovieRepository};
