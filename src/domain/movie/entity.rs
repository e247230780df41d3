// src/domain/movie/entity.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Actor, Award, Genre};

/// Scalar projection of a movie: the columns of the movie table,
/// without child collections. This is what single-row queries and
/// join rows carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Store-generated immutable identifier
    pub id: i64,
    pub title: String,
    pub director: String,
    /// Running time in minutes
    pub duration: u32,
    pub release_date: NaiveDate,
    /// Rating score, 0-100
    pub rate: i32,
}

/// Fields of a movie that has not been persisted yet; the store
/// generates the id at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub duration: u32,
    pub release_date: NaiveDate,
    pub rate: i32,
}

impl NewMovie {
    /// The record this draft becomes once the store assigns `id`
    pub fn into_record(self, id: i64) -> MovieRecord {
        MovieRecord {
            id,
            title: self.title,
            director: self.director,
            duration: self.duration,
            release_date: self.release_date,
            rate: self.rate,
        }
    }
}

/// A movie together with its fully populated child collections.
///
/// Child collections hold no duplicates (judged by child id). They
/// start empty and are populated only by [`assemble_movie`] or by
/// re-fetching after an association mutation, never by direct
/// field assignment.
///
/// [`assemble_movie`]: super::assembly::assemble_movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub duration: u32,
    pub release_date: NaiveDate,
    pub rate: i32,
    pub genres: Vec<Genre>,
    pub actors: Vec<Actor>,
    pub awards: Vec<Award>,
}

impl Movie {
    /// Promote a scalar record to an aggregate with empty child
    /// collections
    pub fn from_record(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            director: record.director,
            duration: record.duration,
            release_date: record.release_date,
            rate: record.rate,
            genres: Vec::new(),
            actors: Vec::new(),
            awards: Vec::new(),
        }
    }

    /// The scalar projection of this aggregate
    pub fn record(&self) -> MovieRecord {
        MovieRecord {
            id: self.id,
            title: self.title.clone(),
            director: self.director.clone(),
            duration: self.duration,
            release_date: self.release_date,
            rate: self.rate,
        }
    }
}
