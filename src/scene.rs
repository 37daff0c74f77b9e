//! Scene graph and lifecycle.
//!
//! The manager owns the camera, the render backend and the scene root. The
//! backend sits behind [`RenderBackend`] so the lifecycle can be exercised
//! without a GPU.

mod manager;
mod node;

pub use manager::SceneManager;
pub use node::{Blending, NodeId, ParticleSystem, PointsMaterial, SceneGraph, SceneNode};

use glam::Mat4;
use image::RgbaImage;

use crate::animation::FrameState;
use crate::error::FrameError;

/// Everything a backend needs to draw one frame
pub struct DrawCall<'a, H> {
    pub nodes: &'a [SceneNode<H>],
    pub view_proj: Mat4,
    pub frame: &'a FrameState,
}

/// GPU seam: resource upload/release and frame submission
pub trait RenderBackend {
    /// Device-side resources for one attached node
    type Handle;

    fn upload(&mut self, system: &ParticleSystem) -> Self::Handle;

    /// Free a node's device resources; called exactly once per handle
    fn release(&mut self, handle: Self::Handle);

    fn resize(&mut self, width: u32, height: u32);

    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Draw to the presentation surface
    fn draw(&mut self, call: DrawCall<'_, Self::Handle>) -> Result<(), FrameError>;

    /// Draw off-screen and read the pixels back
    fn capture(&mut self, call: DrawCall<'_, Self::Handle>) -> Result<RgbaImage, FrameError>;

    /// Release renderer-wide resources; no calls follow
    fn shutdown(&mut self);
}
