//! Smoke Matrix: deterministic particle realms driven by audio.
//!
//! A track name hashes to a seed; the seed picks one of 67 geometry
//! variants, a color and a particle budget. Live spectrum data then
//! modulates scale and opacity every frame.

pub mod animation;
pub mod audio;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hud;
pub mod logging;
pub mod params;
pub mod playlist;
pub mod poster;
pub mod realm;
pub mod rendering;
pub mod scene;
