//! Perspective camera fixed on the realm origin.

use glam::{Mat4, Vec3};

use crate::params::CameraConfig;

/// Camera on +Z looking at the origin, Y up
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    aspect: f32,
}

impl Camera {
    pub fn new(config: CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            config,
            aspect: 1.0,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Update the projection for a new viewport; zero sizes are ignored
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.config.distance)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            self.aspect,
            self.config.near_plane,
            self.config.far_plane,
        )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// Combined view-projection matrix
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_origin_projects_to_centre() {
        let camera = Camera::new(CameraConfig::default(), 1280, 720);
        let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
        // Perspective divide equals distance from the camera
        assert!((clip.w - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_realm_extent_inside_depth_range() {
        let camera = Camera::new(CameraConfig::default(), 800, 800);
        for z in [-1000.0, 0.0, 900.0] {
            let clip = camera.view_proj() * Vec4::new(0.0, 0.0, z, 1.0);
            let depth = clip.z / clip.w;
            assert!((0.0..=1.0).contains(&depth), "z={z} depth={depth}");
        }
    }

    #[test]
    fn test_viewport_updates_aspect() {
        let mut camera = Camera::new(CameraConfig::default(), 1280, 720);
        assert!((camera.aspect() - 16.0 / 9.0).abs() < 1e-6);

        camera.set_viewport(1000, 1000);
        assert_eq!(camera.aspect(), 1.0);

        // Minimised windows report zero size
        camera.set_viewport(0, 0);
        assert_eq!(camera.aspect(), 1.0);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = Camera::new(CameraConfig::default(), 1280, 720);
        let view_proj = camera.view_proj();
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(view_proj.is_finite());
    }
}
