//! Audio playback and analysis configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audio constants shared by the analyser and the bridge
pub mod audio_constants {
    /// Transform window (samples)
    pub const FFT_SIZE: usize = 64;

    /// Frequency bins exposed per frame (`FFT_SIZE / 2`)
    pub const BIN_COUNT: usize = FFT_SIZE / 2;

    /// Band proxies by bin index
    pub const BASS_BIN: usize = 2;
    pub const MID_BIN: usize = 10;
    pub const HIGH_BIN: usize = 20;

    /// Synth block size (samples per Glicol block)
    pub const BLOCK_SIZE: usize = 128;

    /// Samples retained by the analysis tap
    pub const TAP_CAPACITY: usize = 4096;
}

/// Analyser behaviour (mirrors a browser analyser node)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyserConfig {
    /// Time smoothing constant in [0, 1); 0 disables smoothing
    pub smoothing: f32,

    /// Magnitude mapped to byte 0 (dB)
    pub min_db: f32,

    /// Magnitude mapped to byte 255 (dB)
    pub max_db: f32,

    /// Analysis worker period (milliseconds), ~one display frame
    pub update_interval_ms: u64,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.8,
            min_db: -100.0,
            max_db: -30.0,
            update_interval_ms: 16,
        }
    }
}

impl AnalyserConfig {
    /// Validate ranges before the worker starts
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.smoothing) {
            return Err(format!(
                "smoothing must be in [0, 1), got {}",
                self.smoothing
            ));
        }
        if self.min_db >= self.max_db {
            return Err(format!(
                "min_db ({}) must be below max_db ({})",
                self.min_db, self.max_db
            ));
        }
        if self.update_interval_ms == 0 {
            return Err("update interval must be > 0".to_string());
        }
        Ok(())
    }
}

/// Playback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Open an output device at all
    pub enabled: bool,

    /// Directory searched for `<track>` / `<track stem>.wav`
    pub tracks_dir: PathBuf,

    /// Output gain for the procedural fallback voice
    pub synth_gain: f32,

    pub analyser: AnalyserConfig,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tracks_dir: PathBuf::from("tracks"),
            synth_gain: 0.3,
            analyser: AnalyserConfig::default(),
        }
    }
}
