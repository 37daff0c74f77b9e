//! Helices, coils and spiral funnels.

use std::f64::consts::PI;

use super::PointContext;

pub fn log_spiral(c: &PointContext) -> [f64; 3] {
    let s = c.s();
    let tightness = 0.15 + c.seeded_random(0.0, 0.0) * 0.15;
    let z = c.fi() * tightness - 1000.0;
    let r = (150.0 + (c.seed % 150) as f64)
        + (c.fi() * 0.01 + s * 0.01).sin() * (30.0 + (c.seed % 50) as f64);
    let a = c.fi() * tightness;
    [r * a.cos(), r * a.sin(), z]
}

pub fn double_helix(c: &PointContext) -> [f64; 3] {
    let h = c.fi() * 0.1 - 750.0;
    let r = 150.0;
    let strand = if c.i % 2 == 0 { 0.0 } else { PI };
    let a = c.fi() * 0.05 + strand;
    [r * a.cos(), h, r * a.sin()]
}

pub fn phyllotaxis(c: &PointContext) -> [f64; 3] {
    let angle = c.fi() * 137.508 * (PI / 180.0);
    let r = c.fi().sqrt() * 15.0;
    [r * angle.cos(), c.fi() * 2.0 - c.n(), r * angle.sin()]
}

pub fn vortex_coil(c: &PointContext) -> [f64; 3] {
    let turns = 5.0;
    let angle = c.fi() * turns * 2.0 * PI / c.n();
    let r = 50.0 + c.fi() * 0.5;
    [r * angle.cos(), c.fi() * 2.0 - c.n(), r * angle.sin()]
}

pub fn warp_tunnel(c: &PointContext) -> [f64; 3] {
    let depth = c.fi() * 2.0 - c.n();
    let r = 200.0 + depth.abs() * 0.3;
    let angle = c.fi() * 0.1 + c.s() * 0.001;
    [r * angle.cos(), depth, r * angle.sin()]
}

pub fn spiral_tower(c: &PointContext) -> [f64; 3] {
    let h = c.fi() * 3.0 - c.n() * 1.5;
    let r = 150.0 + h.abs() * 0.1;
    let angle = c.fi() * 0.08;
    [r * angle.cos(), h, r * angle.sin()]
}

pub fn spiral_galaxy(c: &PointContext) -> [f64; 3] {
    let arm_len = c.n() / 4.0;
    let angle = c.fi() * 0.02 + (c.fi() / arm_len).floor() * PI / 2.0;
    let r = 100.0 + (c.fi() % arm_len) * 0.8;
    [
        r * angle.cos(),
        c.seeded_random(c.fi(), 0.0) * 100.0 - 50.0,
        r * angle.sin(),
    ]
}

pub fn hourglass_vortex(c: &PointContext) -> [f64; 3] {
    let half = c.n() / 2.0;
    let angle = c.fi() * 0.05 + c.s() * 0.001;
    let r = 300.0 - (c.fi() - half).abs() * 0.3;
    let depth = (c.fi() - half) * 2.0;
    [r * angle.cos(), depth, r * angle.sin()]
}

pub fn wormhole(c: &PointContext) -> [f64; 3] {
    let w = (c.t - 0.5) * 2.0;
    let r = 200.0 * (1.0 - w * w).sqrt() + 50.0;
    let angle = c.fi() * 0.1;
    [r * angle.cos(), w * 500.0, r * angle.sin()]
}

pub fn storm_eye(c: &PointContext) -> [f64; 3] {
    let angle = c.fi() * 0.1 + c.s() * 0.001;
    let r = 100.0 + (c.i % 1000) as f64 * 0.5;
    let h = (c.fi() * 0.05).sin() * 300.0;
    [r * angle.cos(), h, r * angle.sin()]
}

pub fn crystal_spire(c: &PointContext) -> [f64; 3] {
    let h = c.fi() * 2.0;
    let r = 150.0 - h * 0.1;
    let angle = c.fi() * 0.05;
    let facet = ((c.fi() * 0.1).floor() as u64 % 6) as f64;
    let facet_angle = facet * PI / 3.0;
    [
        r * facet_angle.cos() + angle.cos() * 30.0,
        h - c.n(),
        r * facet_angle.sin() + angle.sin() * 30.0,
    ]
}

pub fn stargate(c: &PointContext) -> [f64; 3] {
    let w = (c.t - 0.5) * 4.0;
    let r = 250.0 + w.abs() * 50.0;
    let angle = c.fi() * 0.05;
    [r * angle.cos(), w * 200.0, r * angle.sin()]
}

pub fn code_helix(c: &PointContext) -> [f64; 3] {
    let h = c.fi() * 0.15 - 750.0;
    let r = 180.0 + (c.fi() * 0.02).sin() * 50.0;
    let bit = (c.i % 8) as f64;
    let angle = (bit / 8.0) * PI * 2.0 + c.fi() * 0.01;
    [r * angle.cos(), h, r * angle.sin()]
}

pub fn cyber_cyclone(c: &PointContext) -> [f64; 3] {
    let angle = c.fi() * 0.08 + c.s() * 0.001;
    let r = 200.0 + (c.i % 800) as f64 * 0.3;
    let h = (c.fi() * 0.03).sin() * 400.0;
    let jitter = c.seeded_random(c.fi(), 0.0) * 50.0;
    [r * angle.cos() + jitter, h, r * angle.sin() + jitter]
}

pub fn light_funnel(c: &PointContext) -> [f64; 3] {
    let depth = c.fi() * 2.0 - c.n();
    let r = 100.0 + depth.abs() * 0.1 + (c.fi() * 0.1).sin() * 50.0;
    let angle = c.fi() * 0.05;
    [r * angle.cos(), depth, r * angle.sin()]
}

pub fn data_spiral(c: &PointContext) -> [f64; 3] {
    let angle = c.fi() * 0.15 + c.s() * 0.001;
    let r = (c.fi() * 20.0).sqrt();
    let h = c.fi() * 1.5 - c.n() * 0.75;
    [r * angle.cos(), h, r * angle.sin()]
}

pub fn event_gate(c: &PointContext) -> [f64; 3] {
    let h = (c.t - 0.5) * 800.0;
    let r = 300.0 - h.abs() * 0.3;
    let angle = c.fi() * 0.03;
    let swirl = (c.fi() * 0.1).sin() * 50.0;
    [(r + swirl) * angle.cos(), h, (r + swirl) * angle.sin()]
}
