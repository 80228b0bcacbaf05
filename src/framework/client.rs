//! # Catalog Client
//!
//! This module defines the generic client for communicating with the catalog actor.

use crate::catalog::CatalogStore;
use crate::framework::error::FrameworkError;
use crate::framework::message::{CatalogRequest, Response};
use crate::model::{CastEdit, Movie, MovieCreate, MovieId, MovieUpdate};
use tokio::sync::{mpsc, oneshot};

/// ## CatalogClient
///
/// The `CatalogClient` forwards requests to a [`CatalogActor`](super::CatalogActor) over a Tokio
/// mpsc channel and awaits the answer on a oneshot channel. It holds only a sender,
/// so cloning is inexpensive and clones can be shared across tasks.
///
/// The actor stops once every clone has been dropped.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Returns the current collection state.
    pub async fn list(&self) -> Result<CatalogStore, FrameworkError> {
        self.call(|respond_to| CatalogRequest::List { respond_to })
            .await
    }

    pub async fn get(&self, id: MovieId) -> Result<Option<Movie>, FrameworkError> {
        self.call(|respond_to| CatalogRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(
        &self,
        params: MovieCreate,
    ) -> Result<(CatalogStore, Movie), FrameworkError> {
        self.call(|respond_to| CatalogRequest::Create { params, respond_to })
            .await
    }

    pub async fn update(
        &self,
        id: MovieId,
        update: MovieUpdate,
    ) -> Result<CatalogStore, FrameworkError> {
        self.call(|respond_to| CatalogRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: MovieId) -> Result<CatalogStore, FrameworkError> {
        self.call(|respond_to| CatalogRequest::Delete { id, respond_to })
            .await
    }

    pub async fn edit_cast(
        &self,
        movie_id: MovieId,
        edit: CastEdit,
    ) -> Result<CatalogStore, FrameworkError> {
        self.call(|respond_to| CatalogRequest::EditCast {
            movie_id,
            edit,
            respond_to,
        })
        .await
    }

    async fn call<T, F>(&self, request: F) -> Result<T, FrameworkError>
    where
        F: FnOnce(Response<T>) -> CatalogRequest,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
