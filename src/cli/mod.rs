//! Command-line interface for radio-api.
//!
//! With no subcommand the HTTP server is started. The subcommands inspect
//! the configured stations offline, without touching a running server.

mod commands;

pub use commands::{Cli, Commands, run_command};
