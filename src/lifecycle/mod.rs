//! # System Lifecycle & Orchestration
//!
//! This module starts, configures and stops the catalog.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`CatalogConfig`] read from TOML, with defaults
//! 2. **Actor Creation** - Spawn the [`CatalogActor`](crate::framework::CatalogActor) with its initial store
//! 3. **Wiring** - Hand out [`MovieClient`](crate::clients::MovieClient), [`CastClient`](crate::clients::CastClient) and snapshot subscriptions
//! 4. **Graceful Shutdown** - Drop the clients and await the actor's final state
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor returns its store** - the `JoinHandle` yields the final `CatalogStore`

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::*;
