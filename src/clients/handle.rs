//! # CatalogHandle Trait
//!
//! Shared read operations for the domain clients, built on top of the generic
//! [`CatalogClient`].
use crate::catalog::CatalogStore;
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::{Movie, MovieId};
use async_trait::async_trait;

/// Trait for domain clients to inherit the read side of the catalog.
///
/// Implementors only provide access to the inner [`CatalogClient`] and an error
/// mapping; `list_movies` and `get_movie` come for free.
#[async_trait]
pub trait CatalogHandle: Send + Sync {
    /// The domain-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic CatalogClient.
    fn inner(&self) -> &CatalogClient;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the whole collection state.
    #[tracing::instrument(skip(self))]
    async fn list_movies(&self) -> Result<CatalogStore, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch a single movie by id.
    #[tracing::instrument(skip(self))]
    async fn get_movie(&self, id: MovieId) -> Result<Option<Movie>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
