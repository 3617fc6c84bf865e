/// HTTP error type
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Error payload returned to clients: `{"err": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrResponse {
    pub err: String,
}

/// Client-facing failures.
///
/// Internal detail (filesystem errors, tag parser messages) is logged when
/// the error is created and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid station")]
    InvalidStation,

    #[error("Could not get songs for station")]
    SongsUnavailable,

    #[error("No songs found for station")]
    NoSongs,

    #[error("Could not read song metadata")]
    Metadata,

    #[error("Could not load configuration")]
    Config,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidStation | ApiError::NoSongs => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SongsUnavailable
            | ApiError::Metadata
            | ApiError::Config
            | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::StationNotFound(_) => ApiError::InvalidStation,
            Error::NoSongs(ref station) => {
                tracing::warn!(station = %station, "No playable files for station");
                ApiError::NoSongs
            }
            Error::Scan { .. } | Error::Io(_) => {
                tracing::error!("Scan error: {}", err);
                ApiError::SongsUnavailable
            }
            Error::Metadata { .. } => {
                tracing::error!("{}", err);
                ApiError::Metadata
            }
            Error::Config(ref e) => {
                tracing::error!("Failed to load config, shutting down: {}", e);
                ApiError::Config
            }
            Error::Task(ref msg) => {
                tracing::error!("Worker task failed: {}", msg);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrResponse {
            err: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
