// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod association;
pub mod award;
pub mod genre;
pub mod movie;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{assemble_movie, validate_movie, validate_rate, JoinRow, Movie, MovieRecord, NewMovie};

// Genre Domain
pub use genre::{validate_genre_name, Genre};

// Actor Domain
pub use actor::{validate_actor, Actor, NewActor};

// Award Domain
pub use award::{validate_award, Award, NewAward};

// Associations
pub use association::RelationKind;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
