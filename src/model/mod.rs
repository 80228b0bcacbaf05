//! Pure data structures (DTOs) managed by the [`CatalogStore`](crate::catalog::CatalogStore).

pub mod movie;
pub mod cast;

pub use movie::*;
pub use cast::*;
