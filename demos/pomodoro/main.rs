//! Full-screen Pomodoro tracker.
//!
//! Set `POMODORO_LOG=/path/to/file` to write debug logs there; the terminal
//! itself is owned by the UI. `RUST_LOG` narrows the filter as usual.

use anyhow::{Context, Result};
use bubbletea_rs::Program;
use pomodoro_tracker::Tracker;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("POMODORO_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    tracing::info!("starting pomodoro tracker");

    let program = Program::<Tracker>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
