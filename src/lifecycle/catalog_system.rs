use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::catalog::CatalogStore;
use crate::clients::{CastClient, MovieClient};
use crate::framework::CatalogActor;
use crate::lifecycle::{CatalogConfig, ConfigError};

/// The runtime orchestrator for the movie catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the catalog actor
/// - **Wiring**: Handing out the domain clients and the snapshot subscription
/// - **Configuration**: Choosing the initial collection and strictness
///
/// # Example
///
/// ```rust
/// use movie_catalog::lifecycle::CatalogSystem;
/// use movie_catalog::model::MovieId;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CatalogSystem::new();
///
///     let (_, dune) = system.movie_client.create_movie("Dune", vec![]).await?;
///     system.cast_client.add_actor(dune.id, "Timothée Chalamet").await?;
///     system.movie_client.delete_movie(MovieId(1)).await?;
///
///     let final_state = system.shutdown().await?;
///     assert_eq!(final_state.len(), 2);
///     Ok(())
/// }
/// ```
pub struct CatalogSystem {
    /// Client for movie-level operations
    pub movie_client: MovieClient,

    /// Client for actor-list operations
    pub cast_client: CastClient,

    snapshots: watch::Receiver<CatalogStore>,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: JoinHandle<CatalogStore>,
}

impl CatalogSystem {
    /// Starts a catalog with the default configuration (seeded, lenient).
    pub fn new() -> Self {
        Self::start(CatalogStore::seeded(), &CatalogConfig::default())
    }

    /// Starts a catalog from a validated configuration.
    pub fn with_config(config: &CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = config.initial_store()?;
        Ok(Self::start(store, config))
    }

    fn start(store: CatalogStore, config: &CatalogConfig) -> Self {
        let (actor, client) = CatalogActor::new(store, config.buffer_size, config.strictness());
        let snapshots = actor.subscribe();
        let handle = tokio::spawn(actor.run());

        Self {
            movie_client: MovieClient::new(client.clone()),
            cast_client: CastClient::new(client),
            snapshots,
            handle,
        }
    }

    /// A receiver that always holds the latest collection state.
    pub fn subscribe(&self) -> watch::Receiver<CatalogStore> {
        self.snapshots.clone()
    }

    /// Gracefully shuts down the catalog and returns its final state.
    ///
    /// Dropping both clients closes the request channel; the actor drains what is
    /// left and exits its loop. Clones of the clients held elsewhere keep the actor
    /// alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(store)` with the last collection state
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<CatalogStore, String> {
        info!("Shutting down catalog...");

        drop(self.movie_client);
        drop(self.cast_client);

        match self.handle.await {
            Ok(store) => {
                info!(size = store.len(), "Catalog shutdown complete.");
                Ok(store)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
