//! Command-line argument parsing.

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::realm::{RealmDescriptor, REALM_NAMES};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "smoke-matrix")]
#[command(about = "Deterministic audio-reactive particle realms", long_about = None)]
pub struct Args {
    /// Track names; each one maps to a fixed realm
    #[arg(value_name = "TRACK")]
    pub tracks: Vec<String>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Window width (logical pixels)
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Window height (logical pixels)
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Run without opening an audio device
    #[arg(long)]
    pub no_audio: bool,

    /// Log filter directive, e.g. `debug` or `smoke_matrix=trace`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the realm for each track and exit
    #[arg(long)]
    pub describe: bool,

    /// Print the realm table and exit
    #[arg(long)]
    pub list_realms: bool,
}

impl Args {
    /// Fold command-line overrides into the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.no_audio {
            config.audio.enabled = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[derive(Serialize)]
struct RealmReport<'a> {
    track: &'a str,
    seed: u32,
    dna: String,
    mode: usize,
    realm_name: &'static str,
    color: String,
    particle_count: usize,
    particle_size: f32,
}

#[derive(Serialize)]
struct Report<'a> {
    realm: Vec<RealmReport<'a>>,
}

/// TOML description of the realm behind each track
pub fn describe(tracks: &[String]) -> Result<String, toml::ser::Error> {
    let realm = tracks
        .iter()
        .map(|track| {
            let r = RealmDescriptor::for_track(track);
            RealmReport {
                track,
                seed: r.seed,
                dna: r.dna_label(),
                mode: r.mode,
                realm_name: r.realm_name,
                color: r.color.hex(),
                particle_count: r.particle_count(),
                particle_size: r.particle_size(),
            }
        })
        .collect();
    toml::to_string(&Report { realm })
}

/// One line per realm: index and name
pub fn realm_table() -> String {
    REALM_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{i:>2}  {name}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "smoke-matrix",
            "galaxy.mp3",
            "night_drive.mp3",
            "--width",
            "1920",
            "--no-audio",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.tracks, vec!["galaxy.mp3", "night_drive.mp3"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.window.height, 720);
        assert!(!config.audio.enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_describe_galaxy() {
        let text = describe(&["galaxy.mp3".to_string()]).unwrap();
        assert!(text.contains("[[realm]]"));
        assert!(text.contains("seed = 691743506"));
        assert!(text.contains("realm_name = \"DATA_SPIRAL\""));
        assert!(text.contains("color = \"#7219e6\""));
        assert!(text.contains("particle_count = 15506"));
    }

    #[test]
    fn test_realm_table_lists_all() {
        let table = realm_table();
        assert_eq!(table.lines().count(), REALM_NAMES.len());
        assert!(table.starts_with(" 0  TORUS_KNOT"));
        assert!(table.trim_end().ends_with("66  EVENT_GATE"));
    }
}
