//! Error types for the catalog store.

use crate::model::MovieId;
use thiserror::Error;

/// Reasons a checked store operation declined to change the collection.
///
/// The lenient operations on [`CatalogStore`](super::CatalogStore) swallow these and
/// return the collection unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No movie with this id is in the collection.
    #[error("Movie not found: {0}")]
    MovieNotFound(MovieId),

    /// The movie exists but no actor has this name.
    #[error("Actor {name:?} not found in movie {movie_id}")]
    ActorNotFound { movie_id: MovieId, name: String },

    /// A position-based cast edit pointed past the end of the list.
    #[error("Cast index {index} out of range for movie {movie_id} ({len} actors)")]
    CastIndexOutOfRange {
        movie_id: MovieId,
        index: usize,
        len: usize,
    },

    /// Seed data contained the same id twice.
    #[error("Duplicate movie id: {0}")]
    DuplicateId(MovieId),

    /// Seed data used the largest representable id, which leaves no room above it.
    #[error("Movie id {0} is out of range")]
    IdOutOfRange(MovieId),
}
