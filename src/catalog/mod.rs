//! # Catalog Store
//!
//! The authoritative in-memory movie collection and its pure transformations.
//!
//! Every mutating operation on [`CatalogStore`] takes `&self` and returns a new
//! store, leaving the receiver untouched. The caller keeps whichever state it
//! wants to display; the [`CatalogActor`](crate::framework::CatalogActor) keeps
//! the latest one and publishes it to subscribers.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
