// src/domain/actor.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// An actor appearing in zero or more movies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Store-generated immutable identifier
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub birthday: NaiveDate,
}

impl Actor {
    pub fn new(id: i64, name: String, gender: String, birthday: NaiveDate) -> Self {
        Self {
            id,
            name,
            gender,
            birthday,
        }
    }
}

/// An actor that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub gender: String,
    pub birthday: NaiveDate,
}

/// Validates all Actor invariants
pub fn validate_actor(actor: &NewActor) -> DomainResult<()> {
    if actor.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Actor name cannot be empty".to_string(),
        ));
    }
    if actor.gender.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Actor gender cannot be empty".to_string(),
        ));
    }
    Ok(())
}
