//! Core data models for the radio API.
//!
//! Defines the two entities that flow through every request: [`Song`] and
//! [`Station`]. Both are plain serde records; a `Song` is what the HTTP API
//! speaks, a `Station` is what the config file declares.

use serde::{Deserialize, Serialize};

/// A song as announced by a station.
///
/// Every field is a plain string and missing tags are empty strings, so a
/// `Song::default()` doubles as "nothing is playing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    /// Absolute file path (not guaranteed to still exist)
    pub path: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(rename = "albumartist")]
    pub album_artist: String,
    /// Container format tag, e.g. "MP3" or "FLAC"
    #[serde(rename = "filetype")]
    pub file_type: String,
}

impl Song {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
            && self.title.is_empty()
            && self.artist.is_empty()
            && self.album.is_empty()
            && self.album_artist.is_empty()
            && self.file_type.is_empty()
    }
}

/// A configured radio station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station key used in URLs
    #[serde(alias = "Id")]
    pub id: String,

    /// Display label
    #[serde(default, alias = "Name")]
    pub name: String,

    /// Directories relative to the music root
    #[serde(default, alias = "Paths")]
    pub paths: Vec<String>,
}
