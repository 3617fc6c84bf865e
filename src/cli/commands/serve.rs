//! HTTP server command.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

use crate::api::{self, AppState};
use crate::config;
use crate::now_playing::NowPlaying;

/// Serve the API on `0.0.0.0:port` until ctrl-c or a fatal config error.
pub fn cmd_serve(rt: &Runtime, config_path: &Path, port: u16) -> anyhow::Result<()> {
    rt.block_on(async {
        // The station list is a precondition: fail fast if it's unusable
        let config = config::load(config_path)
            .with_context(|| format!("Could not load config from {}", config_path.display()))?;
        info!(
            stations = config.stations.len(),
            music_root = %config.music_root.display(),
            "Loaded config from {:?}",
            config_path
        );

        let state = AppState::new(config_path, Arc::new(NowPlaying::new()));
        let shutdown = state.shutdown().clone();

        api::serve(state, SocketAddr::from(([0, 0, 0, 0], port)))
            .await
            .context("Server error")?;

        if let Some(reason) = shutdown.reason() {
            anyhow::bail!("Shut down after fatal error: {reason}");
        }
        info!("Server stopped");
        Ok(())
    })
}
