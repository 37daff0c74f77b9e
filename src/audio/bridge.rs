//! Analysis bridge between a playback element and the render loop.
//!
//! Attaches once to a [`SampleTap`], analyses it on a worker thread and
//! exposes the latest byte spectrum without ever blocking the frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::analyser::FrequencyAnalyser;
use super::player::PlaybackEvent;
use super::tap::SampleTap;
use super::{Bands, Spectrum};
use crate::error::AudioError;
use crate::params::audio_constants::{BIN_COUNT, FFT_SIZE};
use crate::params::AnalyserConfig;

/// Analysis context state; starts suspended until playback begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Suspended,
    Running,
}

struct Shared {
    spectrum: Mutex<Spectrum>,
    running: AtomicBool,
    stop: AtomicBool,
}

pub struct AudioBridge {
    config: AnalyserConfig,
    source: Option<SampleTap>,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
    data: Spectrum,
}

impl AudioBridge {
    pub fn new(config: AnalyserConfig) -> Self {
        Self {
            config,
            source: None,
            shared: Arc::new(Shared {
                spectrum: Mutex::new([0; BIN_COUNT]),
                running: AtomicBool::new(false),
                stop: AtomicBool::new(false),
            }),
            worker: None,
            data: [0; BIN_COUNT],
        }
    }

    /// Attach to a playback element's tap. Only the first call has effect.
    pub fn attach(&mut self, tap: &SampleTap) -> Result<(), AudioError> {
        if let Some(source) = &self.source {
            if source.same_source(tap) {
                debug!("analysis already attached to this source");
            } else {
                warn!("analysis already attached to another source, ignoring");
            }
            return Ok(());
        }

        self.config.validate().map_err(AudioError::InvalidConfig)?;

        let worker =
            spawn_analysis_thread(self.config.clone(), tap.clone(), Arc::clone(&self.shared))
                .map_err(AudioError::Worker)?;

        self.source = Some(tap.clone());
        self.worker = Some(worker);
        info!(
            fft_size = FFT_SIZE,
            bins = BIN_COUNT,
            "audio analysis attached (suspended)"
        );
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.source.is_some()
    }

    /// React to a transport transition; the first play resumes the context
    pub fn handle_event(&mut self, event: PlaybackEvent) {
        if event == PlaybackEvent::Play && self.is_attached() {
            self.resume();
        }
    }

    pub fn resume(&mut self) {
        if !self.shared.running.swap(true, Ordering::AcqRel) {
            info!("audio analysis resumed");
        }
    }

    pub fn state(&self) -> ContextState {
        if self.shared.running.load(Ordering::Acquire) {
            ContextState::Running
        } else {
            ContextState::Suspended
        }
    }

    /// Refresh the per-frame spectrum in place.
    ///
    /// Returns `None` with nothing attached. On lock contention the previous
    /// frame's values are kept.
    pub fn refresh(&mut self) -> Option<&Spectrum> {
        self.source.as_ref()?;
        if let Ok(latest) = self.shared.spectrum.try_lock() {
            self.data = *latest;
        }
        Some(&self.data)
    }

    /// Band proxies from the last refreshed spectrum
    pub fn bands(&self) -> Option<Bands> {
        self.source.as_ref().map(|_| Bands::from_spectrum(&self.data))
    }
}

impl Drop for AudioBridge {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("analysis worker panicked");
            }
        }
    }
}

/// Spawn the analysis worker
fn spawn_analysis_thread(
    config: AnalyserConfig,
    tap: SampleTap,
    shared: Arc<Shared>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("audio-analysis".into())
        .spawn(move || {
            let mut analyser = FrequencyAnalyser::new(&config);
            let mut window = [0.0f32; FFT_SIZE];
            let interval = Duration::from_millis(config.update_interval_ms);

            while !shared.stop.load(Ordering::Acquire) {
                thread::sleep(interval);

                if !shared.running.load(Ordering::Acquire) {
                    continue;
                }

                tap.latest(&mut window);
                let spectrum = *analyser.process(&window);
                if let Ok(mut slot) = shared.spectrum.lock() {
                    *slot = spectrum;
                }
            }
            debug!("analysis worker stopped");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn fast_config() -> AnalyserConfig {
        AnalyserConfig {
            update_interval_ms: 1,
            ..Default::default()
        }
    }

    fn tone_tap(bin: usize) -> SampleTap {
        let tap = SampleTap::new(256);
        let samples: Vec<f32> = (0..256)
            .map(|n| (2.0 * PI * bin as f32 * n as f32 / FFT_SIZE as f32).sin())
            .collect();
        tap.push_slice(&samples);
        tap
    }

    #[test]
    fn test_unattached_reports_no_data() {
        let mut bridge = AudioBridge::new(fast_config());
        assert!(bridge.refresh().is_none());
        assert!(bridge.bands().is_none());
        assert_eq!(bridge.state(), ContextState::Suspended);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut bridge = AudioBridge::new(fast_config());
        let tap = SampleTap::new(64);
        let other = SampleTap::new(64);

        bridge.attach(&tap).unwrap();
        bridge.attach(&tap).unwrap();
        bridge.attach(&other).unwrap();

        let source = bridge.source.as_ref().unwrap();
        assert!(source.same_source(&tap));
    }

    #[test]
    fn test_starts_suspended_until_play() {
        let mut bridge = AudioBridge::new(fast_config());
        bridge.attach(&tone_tap(2)).unwrap();
        assert_eq!(bridge.state(), ContextState::Suspended);

        bridge.handle_event(PlaybackEvent::Pause);
        assert_eq!(bridge.state(), ContextState::Suspended);

        bridge.handle_event(PlaybackEvent::Play);
        assert_eq!(bridge.state(), ContextState::Running);
    }

    #[test]
    fn test_suspended_spectrum_is_zero() {
        let mut bridge = AudioBridge::new(fast_config());
        bridge.attach(&tone_tap(2)).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert!(bridge.refresh().unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_running_bridge_reports_bass() {
        let mut bridge = AudioBridge::new(fast_config());
        bridge.attach(&tone_tap(2)).unwrap();
        bridge.handle_event(PlaybackEvent::Play);

        let mut bass = 0;
        for _ in 0..500 {
            bridge.refresh();
            bass = bridge.bands().unwrap().bass;
            if bass > 0 {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(bass, 255);
    }

    #[test]
    fn test_invalid_config_rejected_on_attach() {
        let mut bridge = AudioBridge::new(AnalyserConfig {
            smoothing: 1.5,
            ..Default::default()
        });
        let err = bridge.attach(&SampleTap::new(8)).unwrap_err();
        assert!(matches!(err, AudioError::InvalidConfig(_)));
        assert!(!bridge.is_attached());
    }
}
