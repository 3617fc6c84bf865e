//! Radio API - a small "now playing" service for radio stations.
//!
//! Tracks which song each configured station is currently announcing and
//! can pick a random song from a station's music directories, reading its
//! tags on demand. Stations are declared in a TOML config file that is
//! re-read on every request.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod metadata;
pub mod model;
pub mod now_playing;
pub mod scanner;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging: stdout, no timestamps
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("radio_api=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).without_time())
        .with(filter)
        .init();

    cli::run_command(&args)
}
