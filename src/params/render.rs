//! Window configuration.

use serde::{Deserialize, Serialize};

/// Initial window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width (logical pixels)
    pub width: u32,

    /// Window height (logical pixels)
    pub height: u32,

    /// Base window title; the status line is appended at runtime
    pub title: String,

    /// Frames between status line refreshes (title updates are slow on some platforms)
    pub status_interval_frames: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Smoke Matrix".to_string(),
            status_interval_frames: 15,
        }
    }
}
