//! Per-frame animation: rotation drift and audio modulation.
//!
//! [`animate`] is pure: the frame state goes in, the next one comes out.
//! [`AnimationLoop`] owns that state for the active realm and guarantees at
//! most one loop per view.

use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f64::consts::TAU;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::audio::{Bands, Spectrum};
use crate::error::FrameError;

/// Opacity given to a freshly built material
pub const INITIAL_OPACITY: f32 = 0.8;

/// Opacity floor reached with silent or absent audio
pub const BASE_OPACITY: f32 = 0.6;

/// Transform and material values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Euler angles (x, y, z) in radians, kept in `[0, TAU)`
    pub rotation: [f64; 3],
    pub scale: f32,
    pub opacity: f32,
    /// Diagnostic readout, `bass / 10`
    pub sync: f32,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            rotation: [0.0; 3],
            scale: 1.0,
            opacity: INITIAL_OPACITY,
            sync: 0.0,
        }
    }
}

impl FrameState {
    /// Object transform: XYZ Euler rotation then uniform scale
    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z] = self.rotation.map(|a| a as f32);
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, x, y, z),
            Vec3::ZERO,
        )
    }
}

/// Radians per frame for a seed
pub fn rotation_speed(seed: u32) -> f64 {
    ((seed % 10) + 1) as f64 / 1000.0
}

fn advance(angle: f64, step: f64) -> f64 {
    (angle.rem_euclid(TAU) + step).rem_euclid(TAU)
}

/// Advance one frame.
///
/// Rotation always accumulates, wrapped to one turn so the step size never
/// degrades over long sessions. Without audio the transform rests at
/// scale 1 and the base opacity.
pub fn animate(state: FrameState, seed: u32, spectrum: Option<&Spectrum>) -> FrameState {
    let speed = rotation_speed(seed);
    let [x, y, z] = state.rotation;
    let rotation = [
        advance(x, speed * 0.2),
        advance(y, speed * 1.5),
        advance(z, speed * 0.5),
    ];

    match spectrum {
        Some(spectrum) => {
            let bands = Bands::from_spectrum(spectrum);
            FrameState {
                rotation,
                scale: 1.0 + bands.bass as f32 / 500.0,
                opacity: BASE_OPACITY + (bands.average() / 512.0) * 0.4,
                sync: bands.bass as f32 / 10.0,
            }
        }
        None => FrameState {
            rotation,
            scale: 1.0,
            opacity: BASE_OPACITY,
            sync: 0.0,
        },
    }
}

/// Frame counter plus wall-clock span of the loop
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationClock {
    frames: u64,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl AnimationClock {
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.stopped_at = None;
    }

    pub fn stop(&mut self) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(Instant::now());
        }
    }

    pub fn tick(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time since start, frozen once stopped
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_at) {
            (Some(start), Some(stop)) => stop.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Average frame rate over the elapsed span
    pub fn fps(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

/// Frame loop for the active realm
#[derive(Debug, Default)]
pub struct AnimationLoop {
    seed: Option<u32>,
    state: FrameState,
    running: bool,
    clock: AnimationClock,
    failed_frames: u64,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the loop at a new realm; its transform starts from rest
    pub fn reset(&mut self, seed: u32) {
        self.seed = Some(seed);
        self.state = FrameState::default();
    }

    /// Start the loop. Returns false when it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.clock.start();
        debug!("animation loop started");
        true
    }

    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            self.clock.stop();
            debug!(
                frames = self.clock.frames(),
                fps = self.clock.fps(),
                "animation loop cancelled"
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn failed_frames(&self) -> u64 {
        self.failed_frames
    }

    /// Advance and draw one frame.
    ///
    /// Draw errors are logged and absorbed; the loop keeps running. Returns
    /// the new state, or `None` when stopped or no realm is active.
    pub fn tick<F>(&mut self, spectrum: Option<&Spectrum>, draw: F) -> Option<FrameState>
    where
        F: FnOnce(&FrameState) -> Result<(), FrameError>,
    {
        if !self.running {
            return None;
        }
        let seed = self.seed?;

        self.state = animate(self.state, seed, spectrum);
        self.clock.tick();

        if let Err(e) = draw(&self.state) {
            self.failed_frames += 1;
            warn!(frame = self.clock.frames(), "frame dropped: {e}");
        }
        Some(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::audio_constants::BIN_COUNT;

    fn spectrum(bass: u8, mid: u8, high: u8) -> Spectrum {
        let mut s = [0u8; BIN_COUNT];
        s[2] = bass;
        s[10] = mid;
        s[20] = high;
        s
    }

    #[test]
    fn test_rotation_speed_range() {
        assert_eq!(rotation_speed(0), 0.001);
        assert_eq!(rotation_speed(9), 0.01);
        assert_eq!(rotation_speed(691_743_506), 0.007);
    }

    #[test]
    fn test_rotation_accumulates_per_axis() {
        let mut state = FrameState::default();
        for _ in 0..10 {
            state = animate(state, 0, None);
        }
        let [x, y, z] = state.rotation;
        assert!((x - 0.002).abs() < 1e-6);
        assert!((y - 0.015).abs() < 1e-6);
        assert!((z - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_step_is_exact_at_large_angles() {
        let start = FrameState {
            rotation: [4096.0, 1.0e6, TAU - 0.0001],
            ..FrameState::default()
        };
        let next = animate(start, 0, None);
        let [x, y, z] = next.rotation;
        assert!((x - (4096.0f64.rem_euclid(TAU) + 0.0002)).abs() < 1e-12);
        assert!((y - (1.0e6f64.rem_euclid(TAU) + 0.0015)).abs() < 1e-12);
        // Wraps past a full turn
        assert!((z - 0.0004).abs() < 1e-12);
    }

    #[test]
    fn test_long_session_keeps_nominal_speed() {
        let mut state = FrameState::default();
        let frames = 1_000_000;
        for _ in 0..frames {
            state = animate(state, 9, None);
        }
        let expected = (frames as f64 * 0.01 * 0.2).rem_euclid(TAU);
        assert!((state.rotation[0] - expected).abs() < 1e-6);
        assert!(state.rotation.iter().all(|a| (0.0..TAU).contains(a)));

        let before = state.rotation[0];
        let after = animate(state, 9, None).rotation[0];
        assert!(((after - before).rem_euclid(TAU) - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_no_audio_rests_at_base() {
        let state = animate(FrameState::default(), 134, None);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.opacity, 0.6);
        assert_eq!(state.sync, 0.0);
    }

    #[test]
    fn test_full_bass_modulation() {
        let state = animate(FrameState::default(), 1, Some(&spectrum(255, 255, 255)));
        assert!((state.scale - 1.51).abs() < 1e-6);
        assert!((state.opacity - (0.6 + 255.0 / 512.0 * 0.4)).abs() < 1e-6);
        assert!((state.sync - 25.5).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_uses_band_average() {
        let state = animate(FrameState::default(), 1, Some(&spectrum(0, 128, 0)));
        let expected = 0.6 + (128.0 / 3.0 / 512.0) * 0.4;
        assert!((state.opacity - expected).abs() < 1e-6);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn test_silent_spectrum_matches_no_audio() {
        let silent = animate(FrameState::default(), 7, Some(&[0; BIN_COUNT]));
        let absent = animate(FrameState::default(), 7, None);
        assert_eq!(silent, absent);
    }

    #[test]
    fn test_model_matrix_scales_uniformly() {
        let state = FrameState {
            scale: 2.0,
            ..Default::default()
        };
        let p = state.model_matrix().transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert!((p - Vec3::new(2.0, 4.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn test_loop_is_idle_until_started_with_realm() {
        let mut lp = AnimationLoop::new();
        assert!(lp.tick(None, |_| Ok(())).is_none());

        lp.reset(3);
        assert!(lp.tick(None, |_| Ok(())).is_none());

        assert!(lp.start());
        assert!(!lp.start());
        assert!(lp.tick(None, |_| Ok(())).is_some());
        assert_eq!(lp.frames(), 1);
    }

    #[test]
    fn test_draw_errors_do_not_stop_loop() {
        let mut lp = AnimationLoop::new();
        lp.reset(3);
        lp.start();

        let state = lp.tick(None, |_| Err(FrameError::Capture("lost".into())));
        assert!(state.is_some());
        assert!(lp.is_running());
        assert_eq!(lp.failed_frames(), 1);

        assert!(lp.tick(None, |_| Ok(())).is_some());
        assert_eq!(lp.frames(), 2);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut lp = AnimationLoop::new();
        lp.reset(3);
        lp.start();
        lp.cancel();
        assert!(!lp.is_running());
        assert!(lp.tick(None, |_| Ok(())).is_none());
    }

    #[test]
    fn test_clock_freezes_on_stop() {
        let mut clock = AnimationClock::default();
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.fps(), 0.0);

        clock.start();
        clock.tick();
        clock.tick();
        std::thread::sleep(Duration::from_millis(2));
        clock.stop();

        let frozen = clock.elapsed();
        assert!(frozen >= Duration::from_millis(2));
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.elapsed(), frozen);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_reset_restarts_transform() {
        let mut lp = AnimationLoop::new();
        lp.reset(9);
        lp.start();
        lp.tick(Some(&spectrum(200, 0, 0)), |_| Ok(()));
        assert_ne!(lp.state().rotation, [0.0; 3]);

        lp.reset(4);
        assert_eq!(*lp.state(), FrameState::default());
    }
}
