use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a movie in the catalog.
///
/// # Catalog Store
/// Movies are owned by a [`CatalogStore`](crate::catalog::CatalogStore), which assigns
/// the [`MovieId`] and hands out new collection states on every change.
///
/// See [`CatalogStore`](crate::catalog::CatalogStore) for details on:
/// - Creation parameters ([`MovieCreate`])
/// - Update parameters ([`MovieUpdate`])
/// - Cast edits ([`CastEdit`](crate::model::CastEdit))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub actors: Vec<String>,
}

impl Movie {
    /// Creates a new Movie instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the store)
    /// * `title` - Movie title
    /// * `actors` - Cast, in display order
    pub fn new<I, S>(id: MovieId, title: impl Into<String>, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            actors: actors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload for creating a new movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCreate {
    pub title: String,
    #[serde(default)]
    pub actors: Vec<String>,
}

impl MovieCreate {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actors: Vec::new(),
        }
    }
}

// DTOs for Movie updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieUpdate {
    pub title: String,
}

/// The two movies every fresh catalog starts with.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new(
            MovieId(1),
            "Inception",
            ["Leonardo DiCaprio", "Joseph Gordon-Levitt"],
        ),
        Movie::new(MovieId(2), "The Dark Knight", ["Christian Bale", "Heath Ledger"]),
    ]
}
