//! In-memory now-playing store.
//!
//! Maps station id to the song it is currently announcing. The store is
//! created at startup, shared through [`std::sync::Arc`], and dropped at
//! shutdown; nothing is persisted.
//!
//! Writes replace the whole [`Song`] under a write lock, so a reader sees
//! either the previous song or the new one. Conflicting writes are not
//! queued or ordered: the last one to take the lock wins.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::model::Song;

/// Station id -> currently playing song.
#[derive(Debug, Default)]
pub struct NowPlaying {
    slots: RwLock<HashMap<String, Song>>,
}

impl NowPlaying {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current song for a station, or an empty `Song` if nothing is playing.
    pub fn get(&self, station_id: &str) -> Song {
        self.slots
            .read()
            .get(station_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace the station's current song, returning the previous one.
    pub fn set(&self, station_id: &str, song: Song) -> Option<Song> {
        self.slots.write().insert(station_id.to_string(), song)
    }
}
