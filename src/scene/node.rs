//! Particle nodes and the scene root.

use crate::animation::INITIAL_OPACITY;
use crate::geometry::ParticleBuffer;
use crate::realm::{RealmColor, RealmDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    Normal,
    Additive,
}

/// Point-sprite material
#[derive(Debug, Clone, PartialEq)]
pub struct PointsMaterial {
    pub color: RealmColor,
    /// World-space point size, attenuated with distance
    pub size: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub blending: Blending,
}

impl PointsMaterial {
    /// Realm material: derived color, translucent, additive
    pub fn for_realm(realm: &RealmDescriptor) -> Self {
        Self {
            color: realm.color,
            size: realm.particle_size(),
            opacity: INITIAL_OPACITY,
            transparent: true,
            blending: Blending::Additive,
        }
    }
}

/// Geometry plus material for one realm
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub id: NodeId,
    pub realm: RealmDescriptor,
    pub geometry: ParticleBuffer,
    pub material: PointsMaterial,
}

impl ParticleSystem {
    pub fn point_count(&self) -> usize {
        self.geometry.len()
    }
}

/// A node attached to the scene root with its device resources
pub struct SceneNode<H> {
    pub system: ParticleSystem,
    pub handle: H,
}

/// Scene root
pub struct SceneGraph<H> {
    children: Vec<SceneNode<H>>,
}

impl<H> Default for SceneGraph<H> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<H> SceneGraph<H> {
    pub fn attach(&mut self, node: SceneNode<H>) {
        self.children.push(node);
    }

    /// Detach every child, oldest first
    pub fn detach_all(&mut self) -> Vec<SceneNode<H>> {
        std::mem::take(&mut self.children)
    }

    pub fn children(&self) -> &[SceneNode<H>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn active(&self) -> Option<&ParticleSystem> {
        self.children.last().map(|n| &n.system)
    }
}
