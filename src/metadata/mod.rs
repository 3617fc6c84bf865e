//! Audio file metadata reading.
//!
//! Uses the lofty crate for format-independent tag access. The container
//! is detected from the file contents, so a mislabelled extension still
//! parses (or fails) on what the bytes actually are.
//!
//! Only structural failures are errors: a file that can't be opened or
//! parsed. A file with no tags, or with some tags missing, yields empty
//! strings for those fields.

use lofty::file::{FileType, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Song;

/// Read a song's tags from disk.
///
/// The file handle lives only for the duration of this call.
pub fn read(path: &Path) -> Result<Song> {
    let tagged_file = Probe::open(path)
        .map_err(|e| Error::metadata(path, format!("failed to open file: {e}")))?
        .guess_file_type()
        .map_err(|e| Error::metadata(path, format!("failed to probe file: {e}")))?
        .read()
        .map_err(|e| Error::metadata(path, format!("failed to read tags: {e}")))?;

    // Get the primary tag, or fall back to the first available tag
    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag());

    let title = tag.and_then(|t| t.title().map(|s| s.to_string()));
    let artist = tag.and_then(|t| t.artist().map(|s| s.to_string()));
    let album = tag.and_then(|t| t.album().map(|s| s.to_string()));
    let album_artist = tag.and_then(|t| t.get_string(&ItemKey::AlbumArtist).map(str::to_string));

    Ok(Song {
        path: path.to_string_lossy().into_owned(),
        title: title.unwrap_or_default(),
        artist: artist.unwrap_or_default(),
        album: album.unwrap_or_default(),
        album_artist: album_artist.unwrap_or_default(),
        file_type: container_name(tagged_file.file_type()),
    })
}

/// Short container tag reported to clients.
pub fn container_name(file_type: FileType) -> String {
    match file_type {
        FileType::Mpeg => "MP3".to_string(),
        FileType::Flac => "FLAC".to_string(),
        FileType::Mp4 => "M4A".to_string(),
        FileType::Vorbis | FileType::Opus | FileType::Speex => "OGG".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}
