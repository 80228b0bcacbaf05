//! Domain wrappers around [`CatalogClient`](crate::framework::CatalogClient).

pub mod cast_client;
pub mod error;
pub mod handle;
pub mod movie_client;

pub use cast_client::*;
pub use error::*;
pub use handle::*;
pub use movie_client::*;
