//! Test utilities and fixtures for radio-api tests.
//!
//! Provides a throwaway music library with a matching config file, plus
//! helpers that write small but genuinely parseable MP3, FLAC and WAV
//! files so the metadata path can be exercised without shipping binary
//! fixtures.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::MusicLibrary;
//!
//! let mut library = MusicLibrary::new();
//! library.add_station("jazz", "Jazz FM", &["jazz"]);
//! let path = library.add_song("jazz/a.flac", "So What");
//! ```

use lofty::config::WriteOptions;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt, TagType};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::{CONFIG_FILE, Config};
use crate::model::Station;

/// Tag values written by [`write_tagged_song`].
#[derive(Debug, Clone, Copy)]
pub struct SongTags<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub album: &'a str,
    pub album_artist: &'a str,
}

impl<'a> SongTags<'a> {
    /// Tags with the given title and fixed test values elsewhere.
    pub fn titled(title: &'a str) -> Self {
        Self {
            title,
            artist: "Test Artist",
            album: "Test Album",
            album_artist: "Test Album Artist",
        }
    }
}

/// Writes a minimal, valid PCM RIFF/WAVE file with no tags.
///
/// The content is detected as WAV regardless of the file extension.
pub fn write_wav(path: &Path) {
    const SAMPLE_RATE: u32 = 8000;
    let data = vec![0x80u8; SAMPLE_RATE as usize / 10];

    let mut bytes = Vec::with_capacity(44 + data.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes()); // byte rate
    bytes.extend_from_slice(&1u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&8u16.to_le_bytes()); // bits per sample

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&data);
    write_fixture(path, &bytes);
}

/// Writes an untagged MPEG-1 Layer III stream of silent frames.
pub fn write_mp3(path: &Path) {
    // 128 kbps, 44.1 kHz, joint stereo: 144 * 128000 / 44100 = 417 bytes per frame
    const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
    const FRAME_LEN: usize = 417;
    const FRAMES: usize = 20;

    let mut bytes = Vec::with_capacity(FRAME_LEN * FRAMES);
    for _ in 0..FRAMES {
        bytes.extend_from_slice(&FRAME_HEADER);
        bytes.resize(bytes.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    write_fixture(path, &bytes);
}

/// Writes a FLAC stream holding only a STREAMINFO block (one second of
/// 44.1 kHz 16-bit stereo, no audio frames).
pub fn write_flac(path: &Path) {
    const SAMPLE_RATE: u64 = 44_100;
    const CHANNELS: u64 = 2;
    const BITS_PER_SAMPLE: u64 = 16;

    let mut bytes = Vec::with_capacity(4 + 4 + 34);
    bytes.extend_from_slice(b"fLaC");
    // Last-metadata-block flag set, block type 0 (STREAMINFO), length 34
    bytes.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // min block size
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // max block size
    bytes.extend_from_slice(&[0; 6]); // min/max frame size unknown
    let packed = (SAMPLE_RATE << 44)
        | ((CHANNELS - 1) << 41)
        | ((BITS_PER_SAMPLE - 1) << 36)
        | SAMPLE_RATE; // total samples
    bytes.extend_from_slice(&packed.to_be_bytes());
    bytes.extend_from_slice(&[0; 16]); // MD5 of unencoded audio
    write_fixture(path, &bytes);
}

/// Writes a tagged song whose container follows the file extension.
///
/// `.mp3` gets MPEG frames with an ID3v2 tag, `.flac` gets a FLAC stream
/// with Vorbis comments. Anything else gets a WAV file with an ID3v2 tag.
pub fn write_tagged_song(path: &Path, tags: &SongTags<'_>) {
    let tag_type = match path.extension().and_then(|e| e.to_str()) {
        Some("mp3") => {
            write_mp3(path);
            TagType::Id3v2
        }
        Some("flac") => {
            write_flac(path);
            TagType::VorbisComments
        }
        _ => {
            write_wav(path);
            TagType::Id3v2
        }
    };

    let mut tag = Tag::new(tag_type);
    tag.set_title(tags.title.to_string());
    tag.set_artist(tags.artist.to_string());
    tag.set_album(tags.album.to_string());
    tag.insert_text(ItemKey::AlbumArtist, tags.album_artist.to_string());
    tag.save_to_path(path, WriteOptions::default())
        .expect("Failed to write tags to fixture");
}

fn write_fixture(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, bytes).expect("Failed to write audio fixture");
}

/// A temporary music root plus config file.
///
/// Everything is deleted when the fixture is dropped.
pub struct MusicLibrary {
    dir: TempDir,
    stations: Vec<Station>,
}

impl MusicLibrary {
    /// Creates an empty library with a config listing no stations.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        std::fs::create_dir(dir.path().join("music")).expect("Failed to create music root");
        let library = Self {
            dir,
            stations: Vec::new(),
        };
        library.write_config();
        library
    }

    pub fn music_root(&self) -> PathBuf {
        self.dir.path().join("music")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(CONFIG_FILE)
    }

    /// Adds a station, creating its directories, and rewrites the config.
    pub fn add_station(&mut self, id: &str, name: &str, paths: &[&str]) -> Station {
        for path in paths {
            std::fs::create_dir_all(self.music_root().join(path))
                .expect("Failed to create station directory");
        }
        let station = Station {
            id: id.to_string(),
            name: name.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        };
        self.stations.push(station.clone());
        self.write_config();
        station
    }

    /// Writes a tagged song at `relative` (under the music root).
    pub fn add_song(&self, relative: &str, title: &str) -> PathBuf {
        let path = self.music_root().join(relative);
        write_tagged_song(&path, &SongTags::titled(title));
        path
    }

    /// Writes arbitrary bytes at `relative` (under the music root).
    pub fn add_file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.music_root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// The config as currently written to disk.
    pub fn config(&self) -> Config {
        Config {
            music_root: self.music_root(),
            stations: self.stations.clone(),
        }
    }

    fn write_config(&self) {
        let contents = toml::to_string(&self.config()).expect("Failed to serialize config");
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }
}

impl Default for MusicLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_writes_loadable_config() {
        let mut library = MusicLibrary::new();
        library.add_station("jazz", "Jazz FM", &["jazz"]);

        let config = crate::config::load(&library.config_path()).unwrap();
        assert_eq!(config.music_root, library.music_root());
        assert_eq!(config.stations.len(), 1);
        assert!(library.music_root().join("jazz").is_dir());
    }

    #[test]
    fn test_add_song_creates_parents() {
        let library = MusicLibrary::new();
        let path = library.add_song("deep/nested/a.mp3", "Nested");
        assert!(path.is_file());
    }

    #[test]
    fn test_default_library_is_empty() {
        let library = MusicLibrary::default();
        let config = crate::config::load(&library.config_path()).unwrap();
        assert_eq!(config.music_root, library.music_root());
        assert!(config.stations.is_empty());
    }

    #[test]
    fn test_add_song_container_follows_extension() {
        let library = MusicLibrary::new();
        let mp3 = std::fs::read(library.add_song("a.mp3", "A")).unwrap();
        let flac = std::fs::read(library.add_song("b.flac", "B")).unwrap();
        let other = std::fs::read(library.add_song("c.m4a", "C")).unwrap();

        // ID3v2 is prepended to MPEG streams
        assert!(mp3.starts_with(b"ID3"));
        assert!(flac.starts_with(b"fLaC"));
        assert!(other.starts_with(b"RIFF"));
    }

    #[test]
    fn test_song_tags_titled_defaults() {
        let tags = SongTags::titled("Blue in Green");
        assert_eq!(tags.title, "Blue in Green");
        assert_eq!(tags.artist, "Test Artist");
    }
}
