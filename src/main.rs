//! # Movie Catalog
//!
//! Interactive console over an in-memory movie catalog.
//!
//! ```bash
//! cargo run                                  # seeded catalog, commands from stdin
//! cargo run -- --no-seed --strict            # empty catalog, misses reported as errors
//! cargo run -- --config catalog.toml --script demo.txt
//! RUST_LOG=info cargo run                    # log every committed change to stderr
//! ```
//!
//! Type `help` for the list of commands.

use std::path::PathBuf;

use clap::Parser;
use movie_catalog::console::Console;
use movie_catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(version)]
#[command(about = "Manage an in-memory catalog of movies and their actors")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report unknown movie ids and actor names as errors
    #[arg(long)]
    strict: bool,

    /// Start with an empty catalog, ignoring the seed movies and any in the config file
    #[arg(long)]
    no_seed: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if cli.strict {
        config.strict = true;
    }
    if cli.no_seed {
        config.disable_seed();
    }
    info!(?config, "Starting movie catalog");

    let system = CatalogSystem::with_config(&config)?;
    let mut console = Console::attach(&system);
    let mut stdout = std::io::stdout();

    match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            console.run(BufReader::new(file), &mut stdout).await?;
        }
        None => {
            console
                .run(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await?;
        }
    }

    // the console holds client clones; release them so the actor can stop
    drop(console);
    let final_state = system.shutdown().await?;
    info!(size = final_state.len(), "Movie catalog exited");
    Ok(())
}
