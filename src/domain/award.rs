// src/domain/award.rs

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// An award won by a movie.
///
/// Awards are not associated through a join table: each award belongs
/// to exactly one owning movie for its entire lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// Store-generated immutable identifier
    pub id: i64,
    pub name: String,
    pub year: i32,
    /// Owning movie
    pub movie_id: i64,
}

impl Award {
    pub fn new(id: i64, name: String, year: i32, movie_id: i64) -> Self {
        Self {
            id,
            name,
            year,
            movie_id,
        }
    }
}

/// An award that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAward {
    pub name: String,
    pub year: i32,
    /// Owning movie
    pub movie_id: i64,
}

/// Validates all Award invariants
pub fn validate_award(award: &NewAward) -> DomainResult<()> {
    if award.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Award name cannot be empty".to_string(),
        ));
    }
    if award.year <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Award year {} is not a valid year",
            award.year
        )));
    }
    Ok(())
}
