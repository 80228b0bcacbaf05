//! # Console
//!
//! A line-oriented presentation layer for the catalog.
//!
//! The console keeps its own copy of the collection state and never edits it. It
//! sends each command through the domain clients, then replaces its copy wholesale
//! with the latest snapshot from the actor's `watch` channel and re-renders.

pub mod command;
pub mod render;

pub use command::{parse_line, Command};
pub use render::{render_catalog, render_movie};

use std::io::{self, Write};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::clients::{CastClient, CatalogError, MovieClient};
use crate::lifecycle::CatalogSystem;
use crate::model::MovieId;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    movies: MovieClient,
    cast: CastClient,
    snapshots: watch::Receiver<CatalogStore>,
    current: CatalogStore,
}

impl Console {
    pub fn new(
        movies: MovieClient,
        cast: CastClient,
        mut snapshots: watch::Receiver<CatalogStore>,
    ) -> Self {
        let current = snapshots.borrow_and_update().clone();
        Self {
            movies,
            cast,
            snapshots,
            current,
        }
    }

    /// A console attached to a running system.
    pub fn attach(system: &CatalogSystem) -> Self {
        Self::new(
            system.movie_client.clone(),
            system.cast_client.clone(),
            system.subscribe(),
        )
    }

    /// The collection state the console is currently showing.
    pub fn current(&self) -> &CatalogStore {
        &self.current
    }

    /// Reads commands until `quit` or end of input, writing everything to `out`.
    ///
    /// Parse errors and strict-mode misses are printed and the loop continues;
    /// losing the catalog actor ends it with an error.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), ConsoleError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        render_catalog(&self.current, out)?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    write!(out, "{message}")?;
                    if !message.ends_with('\n') {
                        writeln!(out)?;
                    }
                    continue;
                }
            };
            debug!(?command, "Console command");
            let mutation = command.is_mutation();
            match self.execute(command, out).await {
                Ok(Flow::Continue) if mutation => self.refresh(out)?,
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ConsoleError::Catalog(CatalogError::ActorCommunicationError(msg))) => {
                    return Err(CatalogError::ActorCommunicationError(msg).into());
                }
                Err(ConsoleError::Catalog(e)) => writeln!(out, "error: {e}")?,
                Err(e) => return Err(e),
            }
            out.flush()?;
        }
        info!(size = self.current.len(), "Console closed");
        Ok(())
    }

    async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Flow, ConsoleError> {
        match command {
            Command::List => render_catalog(&self.current, out)?,
            Command::Show { id } => match self.current.movie(MovieId(id)) {
                Some(movie) => render_movie(movie, out)?,
                None => writeln!(out, "No movie with id {id}")?,
            },
            Command::Create { title, actors } => {
                let (_, movie) = self.movies.create_movie(title, actors).await?;
                writeln!(out, "Created movie {}", movie.id)?;
            }
            Command::Update { id, title } => {
                self.movies.update_movie(MovieId(id), title).await?;
            }
            Command::Delete { id } => {
                self.movies.delete_movie(MovieId(id)).await?;
            }
            Command::AddActor { id, name } => {
                self.cast.add_actor(MovieId(id), name).await?;
            }
            Command::UpdateActor {
                id,
                old_name,
                new_name,
            } => {
                self.cast
                    .update_actor(MovieId(id), old_name, new_name)
                    .await?;
            }
            Command::RemoveActor { id, name } => {
                self.cast.remove_actor(MovieId(id), name).await?;
            }
            Command::UpdateActorAt {
                id,
                index,
                new_name,
            } => {
                self.cast
                    .update_actor_at(MovieId(id), index, new_name)
                    .await?;
            }
            Command::RemoveActorAt { id, index } => {
                self.cast.remove_actor_at(MovieId(id), index).await?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Replaces the shown state with the actor's latest snapshot and re-renders.
    fn refresh<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.current = self.snapshots.borrow_and_update().clone();
        render_catalog(&self.current, out)
    }
}
