/// Now-playing API routes
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use super::{ApiError, ApiResult, AppState};
use crate::library;
use crate::model::Song;

/// GET /api/{station_id}/np - Current song for a station
///
/// Returns an all-empty `Song` when nothing has been announced yet.
pub async fn get_now_playing(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> ApiResult<Json<Song>> {
    let config = state.load_config().await?;
    let station =
        library::resolve_station(&config, &station_id).ok_or(ApiError::InvalidStation)?;

    let song = state.now_playing().get(&station.id);
    if song.is_empty() {
        tracing::debug!(station = %station.id, "Nothing playing");
    }
    Ok(Json(song))
}

/// POST /api/{station_id}/np - Announce a song for a station
///
/// The payload is stored verbatim. The body is decoded as JSON whatever
/// the Content-Type header says. Unknown station ids are accepted.
pub async fn set_now_playing(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let Json(song) = Json::<Song>::from_bytes(&body).map_err(|rejection| {
        tracing::error!(station = %station_id, "Rejected now-playing payload: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    })?;

    let config = state.load_config().await?;
    if library::resolve_station(&config, &station_id).is_none() {
        tracing::warn!(station = %station_id, "Storing now-playing for unconfigured station");
    }

    tracing::info!(station = %station_id, ?song, "Now playing updated");
    state.now_playing().set(&station_id, song);
    Ok(StatusCode::OK)
}
