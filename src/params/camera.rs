//! Perspective camera configuration.

use serde::{Deserialize, Serialize};

/// Perspective camera looking down -Z at the realm origin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    /// Must clear the +/-1000 unit realm cube from the camera distance
    pub far_plane: f32,

    /// Camera distance from the origin along +Z (world units)
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 4000.0,
            distance: 1000.0,
        }
    }
}
