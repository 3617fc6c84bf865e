/// Random song API route
use axum::{
    Json,
    extract::{Path, State},
};

use super::{ApiError, ApiResult, AppState};
use crate::library;
use crate::model::Song;

/// GET /api/{station_id}/random - Pick a random song and make it current
pub async fn random_song(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> ApiResult<Json<Song>> {
    let config = state.load_config().await?;
    let station = library::resolve_station(&config, &station_id)
        .cloned()
        .ok_or(ApiError::InvalidStation)?;

    let song = library::random_song(config.music_root, station.clone()).await?;

    tracing::info!(station = %station.id, path = %song.path, "Random song selected");
    state.now_playing().set(&station.id, song.clone());
    Ok(Json(song))
}
