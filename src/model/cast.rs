//! Edits to the nested actor list of a [`Movie`].
//!
//! Every change to a movie's cast goes through a [`CastEdit`]. Name-based edits
//! (`Rename`, `Remove`) touch every actor sharing that name; position-based edits
//! (`RenameAt`, `RemoveAt`) touch exactly one element.

use serde::{Deserialize, Serialize};

use crate::catalog::StoreError;
use crate::model::Movie;

/// An operation on the actor list of a single movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastEdit {
    /// Appends a name to the end of the cast.
    Add(String),
    /// Replaces every occurrence of `from` with `to`, in place.
    Rename { from: String, to: String },
    /// Removes every occurrence of the name.
    Remove(String),
    /// Replaces the name at `index`.
    RenameAt { index: usize, to: String },
    /// Removes the name at `index`.
    RemoveAt(usize),
}

impl CastEdit {
    /// Computes the cast that results from applying this edit to `movie`.
    ///
    /// # Errors
    /// Returns [`StoreError::ActorNotFound`] when a name-based edit matches nothing and
    /// [`StoreError::CastIndexOutOfRange`] when a position-based edit misses the list.
    /// The movie itself is never touched.
    pub fn apply_to(&self, movie: &Movie) -> Result<Vec<String>, StoreError> {
        let cast = &movie.actors;
        match self {
            CastEdit::Add(name) => {
                let mut next = cast.clone();
                next.push(name.clone());
                Ok(next)
            }
            CastEdit::Rename { from, to } => {
                ensure_named(movie, from)?;
                Ok(cast
                    .iter()
                    .map(|actor| if actor == from { to.clone() } else { actor.clone() })
                    .collect())
            }
            CastEdit::Remove(name) => {
                ensure_named(movie, name)?;
                Ok(cast.iter().filter(|actor| *actor != name).cloned().collect())
            }
            CastEdit::RenameAt { index, to } => {
                ensure_in_range(movie, *index)?;
                let mut next = cast.clone();
                next[*index] = to.clone();
                Ok(next)
            }
            CastEdit::RemoveAt(index) => {
                ensure_in_range(movie, *index)?;
                let mut next = cast.clone();
                next.remove(*index);
                Ok(next)
            }
        }
    }
}

fn ensure_named(movie: &Movie, name: &str) -> Result<(), StoreError> {
    if movie.actors.iter().any(|actor| actor == name) {
        Ok(())
    } else {
        Err(StoreError::ActorNotFound {
            movie_id: movie.id,
            name: name.to_string(),
        })
    }
}

fn ensure_in_range(movie: &Movie, index: usize) -> Result<(), StoreError> {
    if index < movie.actors.len() {
        Ok(())
    } else {
        Err(StoreError::CastIndexOutOfRange {
            movie_id: movie.id,
            index,
            len: movie.actors.len(),
        })
    }
}
