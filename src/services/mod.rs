// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod actor_service;
pub mod association_service;
pub mod award_service;
pub mod genre_service;
pub mod movie_service;


// Re-export all services and their types
pub use actor_service::ActorService;
pub use association_service::{AssociationService, LinkOutcome};
pub use award_service::AwardService;
pub use genre_service::GenreService;
pub use movie_service::MovieService;
