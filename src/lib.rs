//! # Movie Catalog
//!
//! > **An in-memory movie catalog with a single-writer actor and pure state transitions.**
//!
//! The catalog holds an ordered list of movies, each with an ordered list of actor
//! names. All data lives in memory for the lifetime of the process.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure store, single owner
//!
//! [`CatalogStore`](catalog::CatalogStore) is an immutable value: every operation returns
//! a *new* collection state and leaves the old one untouched. That makes each change
//! trivially atomic; an operation either produces the full new state or the caller
//! keeps the old one.
//!
//! A [`CatalogActor`](framework::CatalogActor) gives the current state exactly one owner.
//! Requests are processed sequentially over a channel, and every committed state is
//! published on a `watch` channel for whoever is rendering it.
//!
//! ### Misses are not failures
//!
//! Updating or deleting a movie that doesn't exist, or removing an actor who isn't in
//! the cast, leaves the catalog unchanged and succeeds. Running the actor with
//! [`Strictness::Strict`](framework::Strictness) reports those misses as typed errors
//! instead, still without touching the catalog.
//!
//! ### Actors are addressed by name *or* position
//!
//! `update_actor` / `remove_actor` affect every actor sharing the given name.
//! `update_actor_at` / `remove_actor_at` affect exactly one entry, which is what you
//! want when a cast contains the same name twice.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The State ([`catalog`], [`model`])
//! - **Role**: Movies, cast edits and the pure [`CatalogStore`](catalog::CatalogStore) transformations.
//!
//! ### 2. The Engine ([`framework`])
//! - **Role**: The actor that owns the current store, its request protocol and the client handle.
//! - **Testing**: [`framework::mock`] scripts the actor's answers for client tests.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: [`MovieClient`](clients::MovieClient) and [`CastClient`](clients::CastClient) expose
//!   the catalog operations with a domain error type.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Configuration, startup, graceful shutdown and tracing setup.
//!
//! ### 5. The Screen ([`console`])
//! - **Role**: A line-oriented presentation layer that re-renders after every change.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ```text
//! create Dune
//! add-actor 3 "Timothée Chalamet"
//! delete 1
//! ```

pub mod catalog;
pub mod clients;
pub mod console;
pub mod framework;
pub mod lifecycle;
pub mod model;
