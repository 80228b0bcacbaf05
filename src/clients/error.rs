//! Error type for the domain clients.

use crate::catalog::StoreError;
use crate::framework::FrameworkError;
use crate::model::MovieId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested movie was not found (strict mode only).
    #[error("Movie not found: {0}")]
    MovieNotFound(MovieId),

    /// No actor with that name in the movie (strict mode only).
    #[error("Actor {name:?} not found in movie {movie_id}")]
    ActorNotFound { movie_id: MovieId, name: String },

    /// A positional cast edit missed the list (strict mode only).
    #[error("Cast index {index} out of range for movie {movie_id} ({len} actors)")]
    CastIndexOutOfRange {
        movie_id: MovieId,
        index: usize,
        len: usize,
    },

    /// An error occurred while communicating with the catalog actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Store(StoreError::MovieNotFound(id)) => CatalogError::MovieNotFound(id),
            FrameworkError::Store(StoreError::ActorNotFound { movie_id, name }) => {
                CatalogError::ActorNotFound { movie_id, name }
            }
            FrameworkError::Store(StoreError::CastIndexOutOfRange {
                movie_id,
                index,
                len,
            }) => CatalogError::CastIndexOutOfRange {
                movie_id,
                index,
                len,
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
