//! # Movie Client
//!
//! Provides the movie-level operations of the catalog. It wraps a
//! `CatalogClient` and exposes them under their domain names.
use crate::catalog::CatalogStore;
use crate::clients::{CatalogError, CatalogHandle};
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::{Movie, MovieCreate, MovieId, MovieUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for creating, renaming and deleting movies.
#[derive(Clone)]
pub struct MovieClient {
    inner: CatalogClient,
}

impl MovieClient {
    pub fn new(inner: CatalogClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogHandle for MovieClient {
    type Error = CatalogError;

    fn inner(&self) -> &CatalogClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl MovieClient {
    /// Appends a new movie and returns the resulting collection with the created movie.
    #[instrument(skip(self))]
    pub async fn create_movie(
        &self,
        title: impl Into<String> + std::fmt::Debug,
        actors: Vec<String>,
    ) -> Result<(CatalogStore, Movie), CatalogError> {
        debug!("Sending request");
        let params = MovieCreate {
            title: title.into(),
            actors,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_movie(
        &self,
        id: MovieId,
        title: impl Into<String> + std::fmt::Debug,
    ) -> Result<CatalogStore, CatalogError> {
        debug!("Sending request");
        let update = MovieUpdate {
            title: title.into(),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_movie(&self, id: MovieId) -> Result<CatalogStore, CatalogError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StoreError;
    use crate::framework::mock::{create_mock_client, expect_create, MockCatalog};

    #[tokio::test]
    async fn test_create_movie_sends_title_and_actors() {
        let (client, mut receiver) = create_mock_client(10);
        let movies = MovieClient::new(client);

        let create_task = tokio::spawn(async move {
            movies
                .create_movie("Dune", vec!["Zendaya".to_string()])
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.title, "Dune");
        assert_eq!(params.actors, vec!["Zendaya"]);

        responder
            .send(Ok(CatalogStore::seeded().create(params)))
            .unwrap();

        let (store, movie) = create_task.await.unwrap().unwrap();
        assert_eq!(movie.id, MovieId(3));
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_strict_miss_maps_to_movie_not_found() {
        let mock = MockCatalog::new();
        mock.expect_update(MovieId(5))
            .return_err(StoreError::MovieNotFound(MovieId(5)).into());

        let movies = MovieClient::new(mock.client());
        let result = movies.update_movie(MovieId(5), "Tenet").await;
        assert_eq!(result, Err(CatalogError::MovieNotFound(MovieId(5))));

        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_failure_is_communication_error() {
        let mock = MockCatalog::new();
        mock.expect_delete(MovieId(1))
            .return_err(FrameworkError::ActorClosed);

        let movies = MovieClient::new(mock.client());
        match movies.delete_movie(MovieId(1)).await {
            Err(CatalogError::ActorCommunicationError(msg)) => assert_eq!(msg, "Actor closed"),
            other => panic!("Expected ActorCommunicationError, got {other:?}"),
        }

        mock.verify();
    }

    #[tokio::test]
    async fn test_handle_reads_are_provided() {
        let mock = MockCatalog::new();
        mock.expect_list().return_ok(CatalogStore::seeded());
        mock.expect_get(MovieId(2))
            .return_ok(CatalogStore::seeded().movie(MovieId(2)).cloned());

        let movies = MovieClient::new(mock.client());
        assert_eq!(movies.list_movies().await.unwrap().len(), 2);
        let knight = movies.get_movie(MovieId(2)).await.unwrap().unwrap();
        assert_eq!(knight.title, "The Dark Knight");

        mock.verify();
    }
}
