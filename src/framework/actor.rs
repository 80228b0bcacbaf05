//! # Catalog Actor
//!
//! This module defines the `CatalogActor`, the single writer of the catalog. It
//! processes requests sequentially and is the only place a new collection state
//! becomes "current".

use crate::catalog::{CatalogStore, StoreError};
use crate::framework::client::CatalogClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::CatalogRequest;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// How the actor answers requests that name a missing movie or actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Answer with the unchanged collection, as if nothing was asked.
    #[default]
    Lenient,
    /// Answer with [`FrameworkError::Store`] describing the miss.
    Strict,
}

impl From<bool> for Strictness {
    fn from(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}

/// The actor that owns the current [`CatalogStore`].
///
/// # Architecture Note
/// The store itself is a plain immutable value. This struct gives it a single
/// owner: requests arrive over an `mpsc` channel and are handled one at a time, so
/// no locking is needed around the state. Each successful mutation replaces the
/// held store and is published on a `watch` channel, where any number of readers
/// (typically one presentation layer) can pick up the latest snapshot.
///
/// # Usage Pattern
///
/// ```rust
/// use movie_catalog::catalog::CatalogStore;
/// use movie_catalog::framework::{CatalogActor, Strictness};
/// use movie_catalog::model::MovieCreate;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CatalogActor::new(CatalogStore::seeded(), 8, Strictness::Lenient);
///     let snapshots = actor.subscribe();
///     let handle = tokio::spawn(actor.run());
///
///     let (_, dune) = client.create(MovieCreate::titled("Dune")).await.unwrap();
///     assert_eq!(dune.id.0, 3);
///     assert_eq!(snapshots.borrow().len(), 3);
///
///     drop(client);
///     let final_state = handle.await.unwrap();
///     assert_eq!(final_state.len(), 3);
/// }
/// ```
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: CatalogStore,
    strictness: Strictness,
    snapshots: watch::Sender<CatalogStore>,
}

impl CatalogActor {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `store` - Initial collection state (e.g. [`CatalogStore::seeded`]).
    /// * `buffer_size` - Capacity of the request channel. When it is full, client
    ///   calls wait for space.
    /// * `strictness` - How misses are reported, see [`Strictness`].
    pub fn new(
        store: CatalogStore,
        buffer_size: usize,
        strictness: Strictness,
    ) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshots, _) = watch::channel(store.clone());
        let actor = Self {
            receiver,
            store,
            strictness,
            snapshots,
        };
        (actor, CatalogClient::new(sender))
    }

    /// Returns a receiver that always holds the latest collection state.
    pub fn subscribe(&self) -> watch::Receiver<CatalogStore> {
        self.snapshots.subscribe()
    }

    /// Runs the event loop until every client has been dropped, then returns the
    /// final collection state.
    pub async fn run(mut self) -> CatalogStore {
        info!(size = self.store.len(), strictness = ?self.strictness, "Catalog actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::List { respond_to } => {
                    debug!(size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                CatalogRequest::Get { id, respond_to } => {
                    let movie = self.store.movie(id).cloned();
                    debug!(%id, found = movie.is_some(), "Get");
                    let _ = respond_to.send(Ok(movie));
                }
                CatalogRequest::Create { params, respond_to } => {
                    debug!(?params, "Create");
                    let (next, movie) = self.store.create(params);
                    let result = self
                        .commit("create", Ok(next))
                        .map(|store| (store, movie));
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(%id, ?update, "Update");
                    let next = self.store.try_update_movie(id, update.title);
                    let _ = respond_to.send(self.commit("update", next));
                }
                CatalogRequest::Delete { id, respond_to } => {
                    debug!(%id, "Delete");
                    let next = self.store.try_delete_movie(id);
                    let _ = respond_to.send(self.commit("delete", next));
                }
                CatalogRequest::EditCast {
                    movie_id,
                    edit,
                    respond_to,
                } => {
                    debug!(%movie_id, ?edit, "EditCast");
                    let next = self.store.try_edit_cast(movie_id, &edit);
                    let _ = respond_to.send(self.commit("edit_cast", next));
                }
            }
        }

        info!(size = self.store.len(), "Shutdown");
        self.store
    }

    /// Makes `next` the current state, or resolves a miss according to strictness.
    fn commit(
        &mut self,
        op: &'static str,
        next: Result<CatalogStore, StoreError>,
    ) -> Result<CatalogStore, FrameworkError> {
        match next {
            Ok(store) => {
                self.store = store;
                self.snapshots.send_replace(self.store.clone());
                info!(op, size = self.store.len(), "Committed");
                Ok(self.store.clone())
            }
            Err(e) => match self.strictness {
                Strictness::Lenient => {
                    debug!(op, reason = %e, "No-op");
                    Ok(self.store.clone())
                }
                Strictness::Strict => {
                    warn!(op, error = %e, "Rejected");
                    Err(e.into())
                }
            },
        }
    }
}
