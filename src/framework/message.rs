//! # Catalog Messages
//!
//! This module defines the message types used for communication between
//! the [`CatalogClient`](super::CatalogClient) and [`CatalogActor`](super::CatalogActor).

use crate::catalog::CatalogStore;
use crate::framework::error::FrameworkError;
use crate::model::{CastEdit, Movie, MovieCreate, MovieId, MovieUpdate};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The variants follow the CRUD shape of the catalog: `List`/`Get` read,
/// `Create`/`Update`/`Delete` manage movies and `EditCast` covers the nested
/// actor list. Every mutation answers with the full collection state that
/// results from it.
#[derive(Debug)]
pub enum CatalogRequest {
    List {
        respond_to: Response<CatalogStore>,
    },
    Get {
        id: MovieId,
        respond_to: Response<Option<Movie>>,
    },
    Create {
        params: MovieCreate,
        respond_to: Response<(CatalogStore, Movie)>,
    },
    Update {
        id: MovieId,
        update: MovieUpdate,
        respond_to: Response<CatalogStore>,
    },
    Delete {
        id: MovieId,
        respond_to: Response<CatalogStore>,
    },
    EditCast {
        movie_id: MovieId,
        edit: CastEdit,
        respond_to: Response<CatalogStore>,
    },
}
