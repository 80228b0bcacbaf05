//! Text rendering of catalog snapshots.

use std::io::{self, Write};

use crate::catalog::CatalogStore;
use crate::model::Movie;

/// Writes the movie list: a heading, then each movie's title and actors.
pub fn render_catalog(store: &CatalogStore, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "MOVIES")?;
    if store.is_empty() {
        writeln!(out, "  (no movies)")?;
    }
    for movie in store.list_movies() {
        writeln!(out, "  [{}] {}", movie.id, movie.title)?;
        writeln!(out, "      Actors: {}", movie.actors.join(", "))?;
    }
    Ok(())
}

/// Writes a single movie with its actors numbered by position.
pub fn render_movie(movie: &Movie, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "[{}] {}", movie.id, movie.title)?;
    if movie.actors.is_empty() {
        writeln!(out, "  (no actors)")?;
    }
    for (index, actor) in movie.actors.iter().enumerate() {
        writeln!(out, "  {index}. {actor}")?;
    }
    Ok(())
}
