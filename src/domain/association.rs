// src/domain/association.rs
//
// Many-to-many relation kinds
//
// Movie–Actor and Movie–Genre associations are structurally identical:
// an unordered (movie_id, other_id) pair with no identity of its own.
// The relation kind selects which join table the pair lives in.

use serde::{Deserialize, Serialize};

/// The "other" side of a movie association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Actor,
    Genre,
}

impl RelationKind {
    /// Join table holding pairs of this kind
    pub(crate) fn table(self) -> &'static str {
        match self {
            RelationKind::Actor => "movie_actor",
            RelationKind::Genre => "movie_genre",
        }
    }

    /// Column naming the non-movie side of the pair
    pub(crate) fn other_column(self) -> &'static str {
        match self {
            RelationKind::Actor => "actor_id",
            RelationKind::Genre => "genre_id",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::Actor => write!(f, "actor"),
            RelationKind::Genre => write!(f, "genre"),
        }
    }
}
