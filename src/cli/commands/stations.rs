//! Offline station inspection commands.

use anyhow::Context;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::error::Error;
use crate::{config, library, scanner};

/// List every configured station with its playable song count
pub fn cmd_stations(rt: &Runtime, config_path: &Path) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    println!("Music root: {}", config.music_root.display());

    if config.stations.is_empty() {
        println!("No stations configured in {}", config_path.display());
        return Ok(());
    }

    for station in config.stations {
        let music_root = config.music_root.clone();
        let paths = station.paths.clone();
        let scanned = rt
            .block_on(tokio::task::spawn_blocking(move || {
                scanner::scan_directories(&music_root, &paths)
            }))
            .map_err(Error::from)
            .and_then(|result| result);

        match scanned {
            Ok(songs) => println!("{:<16} {:<24} {} songs", station.id, station.name, songs.len()),
            Err(e) => println!("{:<16} {:<24} error: {}", station.id, station.name, e),
        }
    }
    Ok(())
}

/// Pick a random song from a station and print it as JSON.
///
/// Unlike the HTTP route this doesn't announce the song anywhere.
pub fn cmd_random(rt: &Runtime, config_path: &Path, station_id: &str) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    let station = library::resolve_station(&config, station_id)
        .cloned()
        .ok_or_else(|| Error::station_not_found(station_id))?;

    let song = rt
        .block_on(library::random_song(config.music_root, station))
        .with_context(|| format!("Could not pick a song for station {station_id}"))?;

    println!("{}", serde_json::to_string_pretty(&song)?);
    Ok(())
}
