//! HTTP JSON API.
//!
//! Routes:
//! - `GET  /api/{station_id}/np`: current song for a station
//! - `POST /api/{station_id}/np`: announce a song for a station
//! - `GET  /api/{station_id}/random`: pick, announce and return a random song
//!
//! Every request re-reads the config file, so station edits apply
//! immediately. Errors are returned as `{"err": "..."}`.

mod error;
mod now_playing;
mod random;
mod shutdown;

pub use error::{ApiError, ApiResult, ErrResponse};
pub use shutdown::Shutdown;

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::{self, Config};
use crate::error::Error;
use crate::now_playing::NowPlaying;

/// Port the server listens on unless overridden.
pub const DEFAULT_PORT: u16 = 8100;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    config_path: Arc<PathBuf>,
    now_playing: Arc<NowPlaying>,
    shutdown: Shutdown,
}

impl AppState {
    pub fn new(config_path: impl Into<PathBuf>, now_playing: Arc<NowPlaying>) -> Self {
        Self {
            config_path: Arc::new(config_path.into()),
            now_playing,
            shutdown: Shutdown::new(),
        }
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Re-read the config file for this request.
    ///
    /// A failure here means the service can no longer resolve stations, so
    /// besides failing the request it trips the fatal shutdown signal.
    pub async fn load_config(&self) -> ApiResult<Config> {
        match config::load_async(self.config_path.as_ref().clone()).await {
            Ok(config) => Ok(config),
            Err(e) => {
                self.shutdown.trigger(e.to_string());
                Err(Error::Config(e).into())
            }
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/{station_id}/np",
            get(now_playing::get_now_playing).post(now_playing::set_now_playing),
        )
        .route("/api/{station_id}/random", get(random::random_song))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until ctrl-c or a fatal shutdown.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let shutdown = state.shutdown().clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        tracing::error!("Failed to listen for ctrl-c: {}", e);
                    }
                    tracing::info!("Received ctrl-c, shutting down");
                }
                _ = shutdown.triggered() => {
                    tracing::error!("Fatal error, shutting down");
                }
            }
        })
        .await
}
