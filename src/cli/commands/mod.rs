//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Run the HTTP API (the default)
//! - `stations`: Offline station inspection

mod serve;
mod stations;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::api::DEFAULT_PORT;
use crate::config;

pub use serve::cmd_serve;
pub use stations::{cmd_random, cmd_stations};

/// Radio API CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "RADIO_API_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Config file (defaults to $XDG_CONFIG_HOME/radio-api/config.toml)
    #[arg(short, long, env = "RADIO_API_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List configured stations and how many songs each can play
    Stations,
    /// Pick a random song from a station and print its metadata
    Random {
        /// Station id
        station: String,
    },
}

impl Cli {
    /// The config file to use: the explicit override, else the default location.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::config_path()
                .ok_or(config::ConfigError::NoConfigDir)
                .context("Could not locate config file"),
        }
    }
}

/// Run the specified CLI command, or the server if none was given.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config_path = cli.config_path()?;

    match &cli.command {
        None => cmd_serve(&rt, &config_path, cli.port),
        Some(Commands::Stations) => cmd_stations(&rt, &config_path),
        Some(Commands::Random { station }) => cmd_random(&rt, &config_path, station),
    }
}
