//! Audio playback and frequency analysis.
//!
//! The player owns the output stream and publishes every sample it writes
//! into a [`SampleTap`]. The bridge attaches to that tap, analyses it on a
//! worker thread and hands the render loop a 32-byte spectrum per frame.

mod analyser;
mod bridge;
mod player;
mod synthesis;
mod tap;
mod track;

pub use analyser::FrequencyAnalyser;
pub use bridge::{AudioBridge, ContextState};
pub use player::{AudioPlayer, PlaybackEvent};
pub use synthesis::composition;
pub use tap::SampleTap;
pub use track::{decode_wav, find_track, resample_linear};

use crate::params::audio_constants::{BASS_BIN, BIN_COUNT, HIGH_BIN, MID_BIN};

/// One frame of byte magnitudes, one per frequency bin
pub type Spectrum = [u8; BIN_COUNT];

/// Band proxies read from single bins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bands {
    pub bass: u8,
    pub mid: u8,
    pub high: u8,
}

impl Bands {
    pub fn from_spectrum(spectrum: &Spectrum) -> Self {
        Self {
            bass: spectrum[BASS_BIN],
            mid: spectrum[MID_BIN],
            high: spectrum[HIGH_BIN],
        }
    }

    /// Mean of the three bands, in byte units
    pub fn average(&self) -> f32 {
        (self.bass as f32 + self.mid as f32 + self.high as f32) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_pick_fixed_bins() {
        let mut spectrum = [0u8; BIN_COUNT];
        spectrum[2] = 200;
        spectrum[10] = 100;
        spectrum[20] = 60;
        spectrum[3] = 255;

        let bands = Bands::from_spectrum(&spectrum);
        assert_eq!(
            bands,
            Bands {
                bass: 200,
                mid: 100,
                high: 60
            }
        );
        assert_eq!(bands.average(), 120.0);
    }
}
