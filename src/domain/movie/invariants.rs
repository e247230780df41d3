// src/domain/movie/invariants.rs

use super::entity::NewMovie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
/// These are the absolute rules that must hold for a movie to be valid
pub fn validate_movie(movie: &NewMovie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_duration(movie.duration)?;
    validate_rate(movie.rate)?;
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Running time must be positive
fn validate_duration(duration: u32) -> DomainResult<()> {
    if duration == 0 {
        return Err(DomainError::InvariantViolation(
            "Movie duration must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Rating score is a percentage. Checked on its own for the update
/// path, which touches only release date and rate.
pub fn validate_rate(rate: i32) -> DomainResult<()> {
    if !(0..=100).contains(&rate) {
        return Err(DomainError::InvariantViolation(format!(
            "Movie rate {} is outside 0-100",
            rate
        )));
    }
    Ok(())
}
