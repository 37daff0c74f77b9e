//! Byte-spectrum analysis of a 64-sample window.
//!
//! Blackman window, forward FFT, `|X|/N` magnitudes, exponential smoothing
//! over time, then a linear map from decibels onto `0..=255`.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;

use crate::params::audio_constants::{BIN_COUNT, FFT_SIZE};
use crate::params::AnalyserConfig;

use super::Spectrum;

pub struct FrequencyAnalyser {
    fft: Arc<dyn Fft<f32>>,
    window: [f32; FFT_SIZE],
    scratch: Vec<Complex<f32>>,
    smoothed: [f32; BIN_COUNT],
    bytes: Spectrum,
    smoothing: f32,
    min_db: f32,
    max_db: f32,
}

impl FrequencyAnalyser {
    pub fn new(config: &AnalyserConfig) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(FFT_SIZE);

        let mut window = [0.0; FFT_SIZE];
        for (i, w) in window.iter_mut().enumerate() {
            *w = blackman_window(i, FFT_SIZE);
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); FFT_SIZE],
            smoothed: [0.0; BIN_COUNT],
            bytes: [0; BIN_COUNT],
            smoothing: config.smoothing,
            min_db: config.min_db,
            max_db: config.max_db,
        }
    }

    /// Analyse the newest `FFT_SIZE` samples and return the byte spectrum.
    ///
    /// Shorter input is treated as zero-padded at the front.
    pub fn process(&mut self, samples: &[f32]) -> &Spectrum {
        let take = samples.len().min(FFT_SIZE);
        let pad = FFT_SIZE - take;
        let recent = &samples[samples.len() - take..];

        for (i, slot) in self.scratch.iter_mut().enumerate() {
            let s = if i < pad { 0.0 } else { recent[i - pad] };
            *slot = Complex::new(s * self.window[i], 0.0);
        }

        self.fft.process(&mut self.scratch);

        let norm = 1.0 / FFT_SIZE as f32;
        let range = self.max_db - self.min_db;
        for k in 0..BIN_COUNT {
            let magnitude = self.scratch[k].norm() * norm;
            let s = self.smoothing * self.smoothed[k] + (1.0 - self.smoothing) * magnitude;
            // Keep denormals and non-finite values out of the running state
            self.smoothed[k] = if s.is_finite() { s } else { 0.0 };

            let db = 20.0 * self.smoothed[k].log10();
            let scaled = 255.0 * (db - self.min_db) / range;
            self.bytes[k] = if scaled.is_nan() {
                0
            } else {
                scaled.clamp(0.0, 255.0) as u8
            };
        }

        &self.bytes
    }

    /// Last computed spectrum
    pub fn spectrum(&self) -> &Spectrum {
        &self.bytes
    }

    /// Forget smoothing history
    pub fn reset(&mut self) {
        self.smoothed = [0.0; BIN_COUNT];
        self.bytes = [0; BIN_COUNT];
    }
}

/// Blackman window (alpha 0.16), periodic form
fn blackman_window(index: usize, size: usize) -> f32 {
    let a = 0.16;
    let a0 = 0.5 * (1.0 - a);
    let a1 = 0.5;
    let a2 = 0.5 * a;
    let x = index as f32 / size as f32;
    a0 - a1 * (2.0 * PI * x).cos() + a2 * (4.0 * PI * x).cos()
}
