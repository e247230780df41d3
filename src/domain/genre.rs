// src/domain/genre.rs

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A movie genre. Names are logically unique across the catalog;
/// uniqueness is checked against the store before creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Store-generated immutable identifier
    pub id: i64,
    pub name: String,
}

impl Genre {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Validates the Genre invariants; genres are created from a bare
/// name, so validation runs on the name itself
pub fn validate_genre_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Genre name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert!(validate_genre_name("Action").is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(validate_genre_name("   ").is_err());
    }
}
