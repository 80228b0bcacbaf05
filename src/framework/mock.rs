//! # Mock Catalog & Testing Guide
//!
//! [`MockCatalog`] hands out a real [`CatalogClient`] whose requests are answered from a
//! queue of scripted expectations instead of a running [`CatalogActor`](super::CatalogActor).
//! It is meant for testing code *around* the client, such as the domain clients in
//! [`crate::clients`], deterministically and with easy error injection.
//!
//! | Feature | MockCatalog | Real Actor |
//! |---------|-------------|------------|
//! | **State** | None, answers are scripted | Real `CatalogStore` |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Needs strict mode and a miss |
//!
//! ## Fluent API
//!
//! ```rust
//! use movie_catalog::framework::mock::MockCatalog;
//! use movie_catalog::framework::FrameworkError;
//! use movie_catalog::model::{Movie, MovieId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCatalog::new();
//!     mock.expect_get(MovieId(1))
//!         .return_ok(Some(Movie::new(MovieId(1), "Inception", ["Leonardo DiCaprio"])));
//!     mock.expect_delete(MovieId(1)).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let movie = client.get(MovieId(1)).await.unwrap().unwrap();
//!     assert_eq!(movie.title, "Inception");
//!     assert!(matches!(client.delete(MovieId(1)).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw Channel Helpers
//!
//! [`create_mock_client`] returns a client together with the receiving end of its
//! channel, so a test can inspect each [`CatalogRequest`] and answer it by hand
//! (see [`expect_create`], [`expect_get`], [`expect_edit_cast`]).

use crate::catalog::CatalogStore;
use crate::framework::client::CatalogClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::{CatalogRequest, Response};
use crate::model::{CastEdit, Movie, MovieCreate, MovieId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request.
#[derive(Debug)]
enum Expectation {
    List(Result<CatalogStore, FrameworkError>),
    Get(MovieId, Result<Option<Movie>, FrameworkError>),
    Create(Result<(CatalogStore, Movie), FrameworkError>),
    Update(MovieId, Result<CatalogStore, FrameworkError>),
    Delete(MovieId, Result<CatalogStore, FrameworkError>),
    EditCast(MovieId, Result<CatalogStore, FrameworkError>),
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    unexpected: Vec<String>,
}

type SharedState = Arc<Mutex<MockState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A catalog stand-in that answers requests from a queue of expectations.
///
/// Requests that don't match the next expectation (wrong kind or wrong id) are
/// recorded and left unanswered, which the caller observes as
/// [`FrameworkError::ActorDropped`]. [`MockCatalog::verify`] panics on any of them.
pub struct MockCatalog {
    client: CatalogClient,
    state: SharedState,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest>(100);
        let state: SharedState = Arc::default();
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();
                answer(request, expectation, &task_state);
            }
        });

        Self {
            client: CatalogClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CatalogClient {
        self.client.clone()
    }

    pub fn expect_list(&self) -> ExpectationBuilder<CatalogStore> {
        self.builder(Expectation::List)
    }

    pub fn expect_get(&self, id: MovieId) -> ExpectationBuilder<Option<Movie>> {
        self.builder(move |response| Expectation::Get(id, response))
    }

    pub fn expect_create(&self) -> ExpectationBuilder<(CatalogStore, Movie)> {
        self.builder(Expectation::Create)
    }

    pub fn expect_update(&self, id: MovieId) -> ExpectationBuilder<CatalogStore> {
        self.builder(move |response| Expectation::Update(id, response))
    }

    pub fn expect_delete(&self, id: MovieId) -> ExpectationBuilder<CatalogStore> {
        self.builder(move |response| Expectation::Delete(id, response))
    }

    pub fn expect_edit_cast(&self, movie_id: MovieId) -> ExpectationBuilder<CatalogStore> {
        self.builder(move |response| Expectation::EditCast(movie_id, response))
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<T, F>(&self, make: F) -> ExpectationBuilder<T>
    where
        F: FnOnce(Result<T, FrameworkError>) -> Expectation + Send + 'static,
    {
        ExpectationBuilder {
            state: self.state.clone(),
            make: Box::new(make),
        }
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T> {
    state: SharedState,
    make: Box<dyn FnOnce(Result<T, FrameworkError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let expectation = (self.make)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

fn answer(request: CatalogRequest, expectation: Option<Expectation>, state: &SharedState) {
    fn reply<T>(respond_to: Response<T>, response: Result<T, FrameworkError>) {
        let _ = respond_to.send(response);
    }

    // A mismatch is recorded before the request (and its responder) is dropped.
    match (request, expectation) {
        (CatalogRequest::List { respond_to }, Some(Expectation::List(response))) => {
            reply(respond_to, response)
        }
        (CatalogRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response)))
            if id == expected =>
        {
            reply(respond_to, response)
        }
        (CatalogRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
            reply(respond_to, response)
        }
        (
            CatalogRequest::Update { id, respond_to, .. },
            Some(Expectation::Update(expected, response)),
        ) if id == expected => reply(respond_to, response),
        (CatalogRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, response)))
            if id == expected =>
        {
            reply(respond_to, response)
        }
        (
            CatalogRequest::EditCast {
                movie_id,
                respond_to,
                ..
            },
            Some(Expectation::EditCast(expected, response)),
        ) if movie_id == expected => reply(respond_to, response),
        (request, expectation) => {
            let description = format!("got {request:?}, expected {expectation:?}");
            lock(state).unexpected.push(description);
        }
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// The test plays the actor: it pulls each request off `receiver`, asserts on
/// the payload and answers through the responder.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(MovieCreate, Response<(CatalogStore, Movie)>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(MovieId, Response<Option<Movie>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an EditCast request
pub async fn expect_edit_cast(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(MovieId, CastEdit, Response<CatalogStore>)> {
    match receiver.recv().await {
        Some(CatalogRequest::EditCast {
            movie_id,
            edit,
            respond_to,
        }) => Some((movie_id, edit, respond_to)),
        _ => None,
    }
}
