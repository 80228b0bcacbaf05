//! # Framework Errors
//!
//! Errors raised while talking to the [`CatalogActor`](super::CatalogActor).
//! Store-level misses travel inside [`FrameworkError::Store`] so clients can
//! recover the exact reason.

use crate::catalog::StoreError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Store(#[from] StoreError),
}
