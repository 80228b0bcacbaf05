//! Single-writer runtime around the [`CatalogStore`](crate::catalog::CatalogStore).
//!
//! # Main Components
//!
//! - [`CatalogActor`] - Task that owns the current collection state
//! - [`CatalogClient`] - Cloneable handle for sending requests to the actor
//! - [`CatalogRequest`] - The message protocol between the two
//! - [`FrameworkError`] - Transport and store errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning the actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::{CatalogActor, Strictness};
pub use client::CatalogClient;
pub use error::FrameworkError;
pub use message::{CatalogRequest, Response};
