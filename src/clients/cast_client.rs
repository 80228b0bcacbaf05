//! # Cast Client
//!
//! Provides the actor-list operations of a single movie. Every method sends one
//! [`CastEdit`] to the catalog actor and returns the resulting collection.
use crate::catalog::CatalogStore;
use crate::clients::{CatalogError, CatalogHandle};
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::{CastEdit, MovieId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for editing the actors of a movie.
#[derive(Clone)]
pub struct CastClient {
    inner: CatalogClient,
}

impl CastClient {
    pub fn new(inner: CatalogClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogHandle for CastClient {
    type Error = CatalogError;

    fn inner(&self) -> &CatalogClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl CastClient {
    /// The actors of a movie, or `None` if the movie doesn't exist.
    #[instrument(skip(self))]
    pub async fn actors(&self, movie_id: MovieId) -> Result<Option<Vec<String>>, CatalogError> {
        Ok(self.get_movie(movie_id).await?.map(|movie| movie.actors))
    }

    #[instrument(skip(self))]
    pub async fn add_actor(
        &self,
        movie_id: MovieId,
        name: impl Into<String> + std::fmt::Debug,
    ) -> Result<CatalogStore, CatalogError> {
        self.edit(movie_id, CastEdit::Add(name.into())).await
    }

    /// Renames every actor called `old_name` in the movie.
    #[instrument(skip(self))]
    pub async fn update_actor(
        &self,
        movie_id: MovieId,
        old_name: impl Into<String> + std::fmt::Debug,
        new_name: impl Into<String> + std::fmt::Debug,
    ) -> Result<CatalogStore, CatalogError> {
        let edit = CastEdit::Rename {
            from: old_name.into(),
            to: new_name.into(),
        };
        self.edit(movie_id, edit).await
    }

    /// Removes every actor called `name` from the movie.
    #[instrument(skip(self))]
    pub async fn remove_actor(
        &self,
        movie_id: MovieId,
        name: impl Into<String> + std::fmt::Debug,
    ) -> Result<CatalogStore, CatalogError> {
        self.edit(movie_id, CastEdit::Remove(name.into())).await
    }

    /// Renames only the actor at `index`.
    #[instrument(skip(self))]
    pub async fn update_actor_at(
        &self,
        movie_id: MovieId,
        index: usize,
        new_name: impl Into<String> + std::fmt::Debug,
    ) -> Result<CatalogStore, CatalogError> {
        let edit = CastEdit::RenameAt {
            index,
            to: new_name.into(),
        };
        self.edit(movie_id, edit).await
    }

    /// Removes only the actor at `index`.
    #[instrument(skip(self))]
    pub async fn remove_actor_at(
        &self,
        movie_id: MovieId,
        index: usize,
    ) -> Result<CatalogStore, CatalogError> {
        self.edit(movie_id, CastEdit::RemoveAt(index)).await
    }

    async fn edit(&self, movie_id: MovieId, edit: CastEdit) -> Result<CatalogStore, CatalogError> {
        debug!(?edit, "Sending request");
        self.inner
            .edit_cast(movie_id, edit)
            .await
            .map_err(Self::map_error)
    }
}
