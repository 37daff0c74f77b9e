//! Ordered track list with wrap-around navigation.

use std::fs;
use std::path::Path;

/// Selected when nothing else is available
pub const DEFAULT_TRACK: &str = "galaxy.mp3";

#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<String>,
    index: usize,
}

impl Playlist {
    /// Never empty: an empty list falls back to [`DEFAULT_TRACK`]
    pub fn new(tracks: Vec<String>) -> Self {
        let tracks = if tracks.is_empty() {
            vec![DEFAULT_TRACK.to_string()]
        } else {
            tracks
        };
        Self { tracks, index: 0 }
    }

    /// `.wav` files in `dir`, sorted by name
    pub fn discover(dir: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|x| x.eq_ignore_ascii_case("wav")))
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    pub fn current(&self) -> &str {
        &self.tracks[self.index]
    }

    pub fn next(&mut self) -> &str {
        self.index = (self.index + 1) % self.tracks.len();
        self.current()
    }

    pub fn previous(&mut self) -> &str {
        self.index = (self.index + self.tracks.len() - 1) % self.tracks.len();
        self.current()
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
