//! Station lookup and random song selection.
//!
//! Composes the [`scanner`] and [`metadata`] modules: a station's
//! directories are walked for candidates, one is picked uniformly at
//! random and its tags are read.

use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Song, Station};
use crate::{metadata, scanner};

/// Finds a station by id. The first entry wins if ids are duplicated.
pub fn resolve_station<'a>(config: &'a Config, id: &str) -> Option<&'a Station> {
    config.stations.iter().find(|station| station.id == id)
}

/// Picks a random song from the station's directories and reads its tags.
///
/// Blocking: walks the filesystem and opens the chosen file.
pub fn pick_random_song(music_root: &Path, station: &Station) -> Result<Song> {
    let paths = scanner::scan_directories(music_root, &station.paths)?;

    let chosen = paths
        .choose(&mut rand::rng())
        .ok_or_else(|| Error::NoSongs(station.id.clone()))?;

    tracing::debug!(
        station = %station.id,
        candidates = paths.len(),
        "Picked {:?}",
        chosen
    );
    metadata::read(chosen)
}

/// Runs [`pick_random_song`] on a blocking worker thread.
pub async fn random_song(music_root: PathBuf, station: Station) -> Result<Song> {
    tokio::task::spawn_blocking(move || pick_random_song(&music_root, &station)).await?
}
