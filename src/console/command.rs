//! Line commands understood by the console.
//!
//! Each input line is split with shell quoting rules, so titles and names with
//! spaces are written as `create "The Prestige" "Hugh Jackman"`.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "console", no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every movie with its actors
    List,

    /// Show one movie with numbered actors
    Show { id: u32 },

    /// Create a movie (the id is assigned automatically)
    Create {
        title: String,
        /// Initial actors, in order
        actors: Vec<String>,
    },

    /// Change a movie's title
    Update { id: u32, title: String },

    /// Delete a movie
    Delete { id: u32 },

    /// Append an actor to a movie
    AddActor { id: u32, name: String },

    /// Rename every actor with this name
    UpdateActor {
        id: u32,
        #[arg(value_name = "OLD")]
        old_name: String,
        #[arg(value_name = "NEW")]
        new_name: String,
    },

    /// Remove every actor with this name
    RemoveActor { id: u32, name: String },

    /// Rename the actor at a position (as numbered by `show`)
    UpdateActorAt {
        id: u32,
        index: usize,
        #[arg(value_name = "NEW")]
        new_name: String,
    },

    /// Remove the actor at a position (as numbered by `show`)
    RemoveActorAt { id: u32, index: usize },

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Whether executing this command can change the catalog.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::List | Command::Show { .. } | Command::Quit)
    }
}

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines and `Err` with a printable message for
/// anything clap or the shell splitter rejects (including `help` output).
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let words = shell_words::split(line).map_err(|e| format!("error: {e}"))?;
    if words.is_empty() {
        return Ok(None);
    }
    Line::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.render().to_string())
}
