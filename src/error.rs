//! Error types for setup, audio, configuration and per-frame work.

use std::path::PathBuf;
use thiserror::Error;

/// Construction failures: fatal to the view, never retried
#[derive(Error, Debug)]
pub enum SetupError {
    /// Window creation failed
    #[error("window error: {0}")]
    Window(#[from] winit::error::OsError),

    /// No rendering surface for the window
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    /// No adapter can present to the surface
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    /// Device request rejected
    #[error("device error: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// Surface reports no usable formats
    #[error("surface has no supported texture format")]
    NoSurfaceFormat,
}

/// Audio failures: the view keeps rendering without modulation
#[derive(Error, Debug)]
pub enum AudioError {
    /// No output device available
    #[error("no audio output device found")]
    NoOutputDevice,

    /// Default stream config query failed
    #[error("audio config error: {0}")]
    StreamConfig(#[from] cpal::DefaultStreamConfigError),

    /// Stream construction failed
    #[error("failed to build audio stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    /// Stream start failed
    #[error("failed to start audio stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    /// Stream pause failed
    #[error("failed to pause audio stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),

    /// Track file could not be decoded
    #[error("track decode error: {0}")]
    Decode(#[from] hound::Error),

    /// Synth engine rejected the composition
    #[error("synth error: {0}")]
    Synth(String),

    /// Analyser settings out of range
    #[error("invalid analyser config: {0}")]
    InvalidConfig(String),

    /// Analysis worker could not be spawned
    #[error("analysis worker error: {0}")]
    Worker(#[source] std::io::Error),
}

/// Config file failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Per-frame failures, caught at the frame boundary
#[derive(Error, Debug)]
pub enum FrameError {
    /// Surface texture unavailable this frame
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    /// Frame readback failed
    #[error("frame capture failed: {0}")]
    Capture(String),

    /// Renderer already released
    #[error("renderer has been released")]
    Released,
}

/// Poster export failures
#[derive(Error, Debug)]
pub enum PosterError {
    #[error("failed to create poster directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode poster: {0}")]
    Image(#[from] image::ImageError),
}
