//! Seeded procedural geometry for particle realms.
//!
//! Every realm shape is a closed-form function of the point index, the point
//! count and the track seed. Generators are stored in a fixed ordered table so
//! the realm selector and the geometry library share one variant count.

mod lattices;
mod rings;
mod scatter;
mod shells;
mod spirals;

use std::f64::consts::PI;

/// Number of geometry variants (and realm names). `mode = seed % VARIANT_COUNT`.
pub const VARIANT_COUNT: usize = 67;

/// Per-point inputs shared by every generator
#[derive(Debug, Clone, Copy)]
pub struct PointContext {
    /// Point index in `0..count`
    pub i: usize,
    /// Total number of points in the buffer
    pub count: usize,
    /// Realm seed
    pub seed: u32,
    /// Rendered point size (pixels)
    pub particle_size: f32,
    /// `(i / count) * 2pi + seed * 0.001`
    pub u: f64,
    /// `((i % 100) / 100) * 2pi`
    pub v: f64,
    /// `i / count`
    pub t: f64,
}

impl PointContext {
    pub fn new(i: usize, count: usize, seed: u32, particle_size: f32) -> Self {
        let n = count as f64;
        let fi = i as f64;
        Self {
            i,
            count,
            seed,
            particle_size,
            u: (fi / n) * PI * 2.0 + seed as f64 * 0.001,
            v: ((i % 100) as f64 / 100.0) * PI * 2.0,
            t: fi / n,
        }
    }

    /// Point index as float
    #[inline]
    pub fn fi(&self) -> f64 {
        self.i as f64
    }

    /// Point count as float
    #[inline]
    pub fn n(&self) -> f64 {
        self.count as f64
    }

    /// Seed as float
    #[inline]
    pub fn s(&self) -> f64 {
        self.seed as f64
    }

    /// Repeatable pseudo-random value in `[0, 1)` tied to the seed.
    pub fn seeded_random(&self, index: f64, offset: f64) -> f64 {
        let x = ((self.s() + index + offset) * 9999.0).sin() * 10000.0;
        x - x.floor()
    }

    /// Fibonacci-sphere angles `(phi, theta)` for this point
    pub fn fibonacci(&self) -> (f64, f64) {
        let phi = (-1.0 + (2.0 * self.fi()) / self.n()).acos();
        let theta = (self.n() * PI).sqrt() * phi;
        (phi, theta)
    }
}

/// A pure point generator: one position per context
pub type Generator = fn(&PointContext) -> [f64; 3];

/// Variant table indexed by mode. Order is part of the realm identity.
pub const VARIANTS: [Generator; VARIANT_COUNT] = [
    rings::torus_knot,
    spirals::log_spiral,
    spirals::double_helix,
    lattices::wave_grid,
    shells::fibonacci_sphere,
    spirals::phyllotaxis,
    shells::light_cylinder,
    scatter::twin_planes,
    spirals::vortex_coil,
    lattices::crystal_lattice,
    shells::torus,
    scatter::bubble_cloud,
    shells::pulse_sphere,
    spirals::warp_tunnel,
    lattices::data_columns,
    scatter::star_field,
    spirals::spiral_tower,
    shells::plasma_globe,
    lattices::eight_branch,
    lattices::terrain_mesh,
    scatter::node_network,
    scatter::tesseract,
    lattices::ocean_waves,
    shells::mobius_strip,
    spirals::spiral_galaxy,
    shells::saturn_ring,
    lattices::crystal_cave,
    scatter::neural_net,
    spirals::hourglass_vortex,
    lattices::laser_grid,
    scatter::electron_orbital,
    spirals::wormhole,
    rings::prism_spectrum,
    shells::sonic_sphere,
    spirals::storm_eye,
    lattices::byte_stream,
    shells::force_field,
    rings::dimensional_rift,
    shells::singularity,
    scatter::photon_burst,
    rings::lotus_bloom,
    shells::void_shell,
    rings::pulse_rings,
    rings::mandala,
    lattices::beam_array,
    spirals::crystal_spire,
    shells::gravity_well,
    scatter::lightning_cells,
    spirals::stargate,
    rings::holo_deck,
    lattices::flux_field,
    scatter::supernova,
    spirals::code_helix,
    shells::void_ring,
    lattices::pulse_cube,
    shells::warp_sphere,
    scatter::spider_web,
    rings::tube_segments,
    spirals::cyber_cyclone,
    scatter::atom_core,
    spirals::light_funnel,
    rings::fractal_rings,
    shells::sonic_ring,
    spirals::data_spiral,
    shells::neon_sphere,
    lattices::quantum_foam,
    spirals::event_gate,
];

/// Flat xyz position buffer, `3 * count` floats
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBuffer {
    positions: Vec<f32>,
}

impl ParticleBuffer {
    /// Number of points
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw xyz floats
    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    /// Position of point `index`
    pub fn point(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(3)?;
        let p = self.positions.get(start..start + 3)?;
        Some([p[0], p[1], p[2]])
    }

    /// Largest absolute coordinate, used for camera framing checks
    pub fn extent(&self) -> f32 {
        self.positions.iter().fold(0.0f32, |m, c| m.max(c.abs()))
    }
}

/// Inputs to [`generate`]
#[derive(Debug, Clone, Copy)]
pub struct RealmConfig {
    pub mode: usize,
    pub count: usize,
    pub seed: u32,
    pub particle_size: f32,
}

/// Build the particle buffer for a realm.
///
/// # Panics
/// If `config.mode >= VARIANT_COUNT`. The selector derives mode as
/// `seed % VARIANT_COUNT`, so an out-of-range mode means the name table and
/// the generator table have drifted apart.
pub fn generate(config: &RealmConfig) -> ParticleBuffer {
    assert!(
        config.mode < VARIANT_COUNT,
        "geometry mode {} outside 0..{}",
        config.mode,
        VARIANT_COUNT
    );
    let generator = VARIANTS[config.mode];

    let mut positions = Vec::with_capacity(config.count * 3);
    for i in 0..config.count {
        let ctx = PointContext::new(i, config.count, config.seed, config.particle_size);
        let [x, y, z] = generator(&ctx);
        positions.extend_from_slice(&[x as f32, y as f32, z as f32]);
    }

    ParticleBuffer { positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(mode: usize, count: usize, seed: u32) -> RealmConfig {
        RealmConfig {
            mode,
            count,
            seed,
            particle_size: 2.0 + (seed % 5) as f32,
        }
    }

    #[test]
    fn test_sphere_variant_buffer_length() {
        let buffer = generate(&config(4, 12000, 134));
        assert_eq!(buffer.as_slice().len(), 36000);
        assert_eq!(buffer.len(), 12000);
    }

    #[test]
    fn test_fibonacci_sphere_radius() {
        let seed = 134;
        let buffer = generate(&config(4, 2000, seed));
        let radius = 300.0 + (seed % 200) as f32;
        for i in 0..buffer.len() {
            let [x, y, z] = buffer.point(i).unwrap();
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - radius).abs() < 0.05, "point {} at r={}", i, r);
        }
    }

    #[test]
    fn test_every_variant_is_finite_and_framed() {
        for mode in 0..VARIANT_COUNT {
            for &seed in &[0u32, 97, 134, 691_743_506, u32::MAX >> 1] {
                let count = 12000 + (seed as usize % 6000);
                let buffer = generate(&config(mode, count, seed));
                assert_eq!(buffer.as_slice().len(), count * 3, "mode {}", mode);
                assert!(
                    buffer.as_slice().iter().all(|c| c.is_finite()),
                    "mode {} produced non-finite output for seed {}",
                    mode,
                    seed
                );
                assert!(
                    buffer.extent() < 100_000.0,
                    "mode {} drifted to {} for seed {}",
                    mode,
                    buffer.extent(),
                    seed
                );
            }
        }
    }

    #[test]
    fn test_variants_are_distinct() {
        let buffers: Vec<_> = (0..VARIANT_COUNT)
            .map(|mode| generate(&config(mode, 500, 4242)))
            .collect();
        for a in 0..VARIANT_COUNT {
            for b in (a + 1)..VARIANT_COUNT {
                assert_ne!(buffers[a], buffers[b], "modes {} and {} match", a, b);
            }
        }
    }

    #[test]
    fn test_seeded_random_range() {
        let ctx = PointContext::new(0, 1, 691_743_506, 3.0);
        for index in 0..1000 {
            let r = ctx.seeded_random(index as f64, 2.0);
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_shared_angles() {
        let ctx = PointContext::new(150, 300, 1000, 2.0);
        assert!((ctx.t - 0.5).abs() < 1e-12);
        assert!((ctx.u - (PI + 1.0)).abs() < 1e-12);
        assert!((ctx.v - PI).abs() < 1e-12);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = generate(&config(0, 0, 12));
        assert!(buffer.is_empty());
        assert_eq!(buffer.point(0), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_mode_panics() {
        generate(&config(VARIANT_COUNT, 10, 1));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_buffer_shape(
            mode in 0usize..VARIANT_COUNT,
            count in 1usize..3000,
            seed in any::<u32>(),
        ) {
            let buffer = generate(&config(mode, count, seed));
            prop_assert_eq!(buffer.as_slice().len(), 3 * count);
            prop_assert!(buffer.as_slice().iter().all(|c| c.is_finite()));
        }

        #[test]
        fn prop_generation_is_deterministic(mode in 0usize..VARIANT_COUNT, seed in any::<u32>()) {
            let a = generate(&config(mode, 400, seed));
            let b = generate(&config(mode, 400, seed));
            prop_assert_eq!(a, b);
        }
    }
}
