//! Parameter definitions with units and documented defaults.
//!
//! Every section deserializes with `#[serde(default)]`, so a config file only
//! needs the keys it overrides.

mod audio;
mod camera;
mod output;
mod render;

// Re-export all types
pub use audio::{audio_constants, AnalyserConfig, AudioConfig};
pub use camera::CameraConfig;
pub use output::{LoggingConfig, PosterConfig};
pub use render::WindowConfig;
