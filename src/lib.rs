// src/lib.rs
// MovieHub - Movie catalog service core
//
// Architecture:
// - Domain-centric: entities and the aggregate assembler are pure
// - Repositories: dumb data mappers over a pooled SQLite store
// - Services: orchestration with check-before-mutate semantics
// - Explicit: No implicit behavior, no magic

// ============================================================================
// MODULES
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    assemble_movie,
    validate_actor,
    validate_award,
    validate_genre_name,
    validate_movie,
    // Actor
    Actor,
    // Award
    Award,
    // Genre
    Genre,
    // Movie
    JoinRow,
    Movie,
    MovieRecord,
    NewActor,
    NewAward,
    NewMovie,
    // Associations
    RelationKind,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ActorRepository,
    AssociationRepository,
    AwardRepository,
    GenreRepository,
    MovieRepository,
    SqliteActorRepository,
    SqliteAssociationRepository,
    SqliteAwardRepository,
    SqliteGenreRepository,
    SqliteMovieRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ActorService,
    AssociationService,
    AwardService,
    GenreService,
    LinkOutcome,
    MovieService,
};
