//! jam - terminal front-end for the game's music engine
//!
//! Run with: cargo run --bin jam
//! Set RUST_LOG (e.g. RUST_LOG=conquest_audio=debug) to write jam.log.

mod app;
mod ui;

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use conquest_audio::EngineConfig;
use tracing_subscriber::EnvFilter;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let config = EngineConfig::default().scope_capacity(app::SCOPE_CAPACITY);
    app::run(config)
}

/// The TUI owns the terminal, so logs go to a file and only when asked for.
fn init_logging() -> EyreResult<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create("jam.log").wrap_err("failed to create jam.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
