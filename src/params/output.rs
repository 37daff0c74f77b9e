//! Logging and poster output configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (`RUST_LOG` takes precedence)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    /// Directory poster PNGs are written to
    pub output_dir: PathBuf,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("posters"),
        }
    }
}
