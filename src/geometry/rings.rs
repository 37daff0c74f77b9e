//! Knots, layered rings and banded families.

use std::f64::consts::PI;

use super::PointContext;

pub fn torus_knot(c: &PointContext) -> [f64; 3] {
    let p = 2.0 + (c.seed % 3) as f64;
    let q = 3.0 + (c.seed % 4) as f64;
    let tube = 150.0 + (c.seed % 100) as f64;
    let r = tube * (2.0 + (q * c.u).cos());
    [r * (p * c.u).cos(), r * (p * c.u).sin(), tube * (q * c.u).sin()]
}

pub fn prism_spectrum(c: &PointContext) -> [f64; 3] {
    let band = c.n() / 7.0;
    let layer = (c.fi() / band).floor();
    let angle = (layer / 7.0) * PI / 3.0;
    let dist = (c.fi() % band) * 3.0;
    let spread = dist * angle.tan();
    let sweep = c.s() + c.fi() * 0.01;
    [spread * sweep.cos(), dist - 500.0, spread * sweep.sin()]
}

pub fn dimensional_rift(c: &PointContext) -> [f64; 3] {
    let side = if c.i % 2 == 0 { 1.0 } else { -1.0 };
    let dist = (c.fi() % (c.n() / 2.0)) * 2.0;
    let offset = (c.fi() * 0.05).sin() * 100.0;
    let sweep = c.s() + c.fi() * 0.01;
    [
        dist * sweep.cos() + side * offset,
        dist * sweep.sin(),
        side * 200.0,
    ]
}

pub fn lotus_bloom(c: &PointContext) -> [f64; 3] {
    let petals = 8.0;
    let petal = (c.t * petals).floor();
    let angle = (petal / petals) * PI * 2.0;
    let r = (c.fi() % (c.n() / petals)) * 0.5;
    let curve = (r * 0.1).sin() * 100.0;
    [(r + curve) * angle.cos(), r * 0.5, (r + curve) * angle.sin()]
}

pub fn pulse_rings(c: &PointContext) -> [f64; 3] {
    let band = c.n() / 20.0;
    let wave = (c.fi() / band).floor();
    let r = wave * 50.0 + 100.0;
    let angle = (c.fi() % band) * 0.5;
    [
        r * angle.cos(),
        r * angle.sin(),
        c.seeded_random(c.fi(), 0.0) * 100.0 - 50.0,
    ]
}

pub fn mandala(c: &PointContext) -> [f64; 3] {
    let layer = (c.i / 200) as f64;
    let r = (c.i % 200) as f64 * 2.0;
    let angle = c.fi() * 0.1 + layer * (PI / 6.0);
    [r * angle.cos(), layer * 30.0 - 300.0, r * angle.sin()]
}

pub fn holo_deck(c: &PointContext) -> [f64; 3] {
    let band = c.n() / 10.0;
    let layer = (c.fi() / band).floor();
    let r = 200.0 + layer * 30.0;
    let angle = (c.fi() % band) * 0.2;
    let flicker = c.seeded_random(c.fi(), 0.0) * 20.0;
    [
        (r + flicker) * angle.cos(),
        layer * 50.0 - 250.0,
        (r + flicker) * angle.sin(),
    ]
}

pub fn tube_segments(c: &PointContext) -> [f64; 3] {
    let band = c.n() / 10.0;
    let segment = (c.fi() / band).floor();
    let angle = (c.fi() % band) * 0.1;
    let r = 150.0 + (angle * 2.0).sin() * 50.0;
    [segment * 100.0 - 500.0, r * angle.cos(), r * angle.sin()]
}

pub fn fractal_rings(c: &PointContext) -> [f64; 3] {
    let band = c.n() / 5.0;
    let level = (c.fi() / band).floor();
    let scale = 0.5f64.powf(level);
    let angle = (c.fi() % band) * 0.2;
    let r = 500.0 * scale;
    [
        r * angle.cos() + level * 100.0,
        r * angle.sin(),
        level * 100.0 - 200.0,
    ]
}
