//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable (default `warn`)
//! - **Compact format** without module paths (`with_target(false)`)
//! - **stderr output**, so log lines never mix with the console's rendered catalog on stdout
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (initial size, strictness) and shutdown (final size)
//! - **Mutations**: `Committed op="create" size=3` for every change that took effect
//! - **Misses**: `No-op` at debug in lenient mode, `Rejected` at warn in strict mode
//! - **Client calls**: one span per domain client method, with its arguments
//!
//! ## Usage Examples
//!
//! ```bash
//! # Show every committed change
//! RUST_LOG=info cargo run
//!
//! # Full payloads, including no-op misses
//! RUST_LOG=debug cargo run
//!
//! # Only the actor
//! RUST_LOG=movie_catalog::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**, a short console session produces:
//!
//! ```text
//! INFO Catalog actor started size=2 strictness=Lenient
//! INFO Committed op="create" size=3
//! INFO Committed op="edit_cast" size=3
//! INFO Committed op="delete" size=2
//! INFO Shutdown size=2
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
