use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// File name suffixes recognised as playable songs.
///
/// Matching is an exact, case-sensitive suffix check: `track.MP3` is not a
/// song.
pub const SONG_EXTENSIONS: [&str; 3] = [".flac", ".mp3", ".m4a"];

/// Check if a path names a playable song.
pub fn is_song(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| SONG_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

/// Join a station directory onto the music root.
///
/// Station paths are always relative to the root; a leading slash does not
/// escape it.
pub fn station_dir(music_root: &Path, relative: &str) -> PathBuf {
    music_root.join(relative.trim_start_matches('/'))
}

/// Recursively collects every song under `music_root/dir` for each dir.
///
/// Results are in filesystem traversal order. Any walk error (missing
/// directory, permission denied) aborts the whole scan.
pub fn scan_directories(music_root: &Path, dirs: &[String]) -> Result<Vec<PathBuf>> {
    let mut songs = Vec::new();

    for dir in dirs {
        let full_dir = station_dir(music_root, dir);
        for entry in WalkDir::new(&full_dir) {
            let entry = entry.map_err(|e| Error::scan(&full_dir, e))?;
            if !entry.file_type().is_dir() && is_song(entry.path()) {
                songs.push(entry.into_path());
            }
        }
    }

    tracing::debug!(dirs = dirs.len(), songs = songs.len(), "Scanned station directories");
    Ok(songs)
}
