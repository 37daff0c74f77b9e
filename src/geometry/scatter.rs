//! Seeded point clouds: every draw goes through `seeded_random`, so the
//! scatter is identical for a given track.

use std::f64::consts::PI;

use super::PointContext;

pub fn twin_planes(c: &PointContext) -> [f64; 3] {
    let size = 400.0;
    let side = if c.i % 2 == 0 { 1.0 } else { -1.0 };
    [
        (c.seeded_random(c.fi(), 0.0) * 2.0 - 1.0) * size,
        side * size,
        (c.seeded_random(c.fi(), 1.0) * 2.0 - 1.0) * size,
    ]
}

pub fn bubble_cloud(c: &PointContext) -> [f64; 3] {
    let scale = 500.0;
    let x = (c.seeded_random(c.fi(), 0.0) * 2.0 - 1.0) * scale;
    let y = (c.seeded_random(c.fi(), 1.0) * 2.0 - 1.0) * scale;
    let z = (c.seeded_random(c.fi(), 2.0) * 2.0 - 1.0) * scale;
    let bubble = c.seeded_random(c.fi(), 3.0) * 50.0 + 10.0;
    let s = c.s();
    [
        x + (s + c.fi()).cos() * bubble,
        y + (s + c.fi() * 2.0).sin() * bubble,
        z + (s + c.fi() * 3.0).cos() * bubble,
    ]
}

pub fn star_field(c: &PointContext) -> [f64; 3] {
    let r = c.seeded_random(c.fi(), 0.0) * 800.0 + 200.0;
    let phi = c.seeded_random(c.fi(), 1.0) * PI;
    let theta = c.seeded_random(c.fi(), 2.0) * PI * 2.0;
    [
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    ]
}

pub fn node_network(c: &PointContext) -> [f64; 3] {
    let node = (c.seeded_random(c.fi(), 0.0) * 20.0).floor();
    let angle = (node / 20.0) * PI * 2.0;
    let radius = 400.0;
    let link = c.seeded_random(c.fi(), 1.0) * 300.0;
    [
        radius * angle.cos() + link * c.u.cos(),
        c.seeded_random(c.fi(), 2.0) * 400.0 - 200.0,
        radius * angle.sin() + link * c.u.sin(),
    ]
}

pub fn tesseract(c: &PointContext) -> [f64; 3] {
    let size = 250.0;
    let w = (c.seeded_random(c.fi(), 0.0) * 2.0 - 1.0) * size;
    let x = (c.seeded_random(c.fi(), 1.0) * 2.0 - 1.0) * size;
    let y = (c.seeded_random(c.fi(), 2.0) * 2.0 - 1.0) * size;
    let z = (c.seeded_random(c.fi(), 3.0) * 2.0 - 1.0) * size;
    // Perspective projection from the fourth axis
    let projection = 1.0 / (2.0 - w / 500.0);
    [x * projection, y * projection, z * projection]
}

pub fn neural_net(c: &PointContext) -> [f64; 3] {
    let neuron = (c.seeded_random(c.fi(), 0.0) * 50.0).floor();
    let nx = c.seeded_random(neuron, 0.0) * 800.0 - 400.0;
    let ny = c.seeded_random(neuron, 1.0) * 800.0 - 400.0;
    let nz = c.seeded_random(neuron, 2.0) * 800.0 - 400.0;
    let axon = c.seeded_random(c.fi(), 1.0) * 150.0;
    let angle = c.seeded_random(c.fi(), 2.0) * PI * 2.0;
    [nx + axon * angle.cos(), ny + axon * angle.sin(), nz]
}

pub fn electron_orbital(c: &PointContext) -> [f64; 3] {
    let r = 150.0 + c.seeded_random(c.fi(), 0.0) * 200.0;
    let phi = c.seeded_random(c.fi(), 1.0) * PI;
    let theta = c.seeded_random(c.fi(), 2.0) * PI * 2.0;
    let density = (-r / 200.0).exp();
    [
        r * phi.sin() * theta.cos() * density,
        r * phi.sin() * theta.sin() * density,
        r * phi.cos() * density,
    ]
}

pub fn photon_burst(c: &PointContext) -> [f64; 3] {
    let speed = c.fi() * 5.0;
    let angle = c.seeded_random(c.fi(), 0.0) * PI * 2.0;
    let elevation = c.seeded_random(c.fi(), 1.0) * PI - PI / 2.0;
    [
        speed * angle.cos() * elevation.cos(),
        speed * elevation.sin(),
        speed * angle.sin() * elevation.cos(),
    ]
}

pub fn lightning_cells(c: &PointContext) -> [f64; 3] {
    let cell = (c.seeded_random(c.fi(), 0.0) * 10.0).floor();
    let cell_x = (cell % 3.0 - 1.0) * 300.0;
    let cell_z = ((cell / 3.0).floor() - 1.0) * 300.0;
    let y = c.seeded_random(c.fi(), 1.0) * 600.0 - 300.0;
    let offset = c.seeded_random(c.fi(), 2.0) * 100.0;
    [cell_x + offset, y, cell_z + offset]
}

pub fn supernova(c: &PointContext) -> [f64; 3] {
    let angle = c.seeded_random(c.fi(), 0.0) * PI * 2.0;
    let phi = c.seeded_random(c.fi(), 1.0) * PI;
    let speed = c.fi() * 3.0 + c.seeded_random(c.fi(), 2.0) * 100.0;
    [
        speed * phi.sin() * angle.cos(),
        speed * phi.sin() * angle.sin(),
        speed * phi.cos(),
    ]
}

pub fn spider_web(c: &PointContext) -> [f64; 3] {
    let nodes = 20.0;
    let from = (c.seeded_random(c.fi(), 0.0) * nodes).floor();
    let to = (c.seeded_random(c.fi(), 1.0) * nodes).floor();
    let along = (c.i % 100) as f64 / 100.0;
    let a1 = (from / nodes) * PI * 2.0;
    let a2 = (to / nodes) * PI * 2.0;
    let r = 400.0;
    [
        r * a1.cos() * (1.0 - along) + r * a2.cos() * along,
        c.seeded_random(c.fi(), 2.0) * 200.0 - 100.0,
        r * a1.sin() * (1.0 - along) + r * a2.sin() * along,
    ]
}

pub fn atom_core(c: &PointContext) -> [f64; 3] {
    let nucleus = c.fi() < c.n() / 10.0;
    let r = if nucleus {
        50.0
    } else {
        200.0 + c.seeded_random(c.fi(), 0.0) * 100.0
    };
    let phi = c.seeded_random(c.fi(), 1.0) * PI;
    let theta = c.seeded_random(c.fi(), 2.0) * PI * 2.0;
    [
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_core_nucleus_radius() {
        let [x, y, z] = atom_core(&PointContext::new(3, 1000, 8, 2.0));
        let r = (x * x + y * y + z * z).sqrt();
        assert!((r - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_twin_planes_split_by_parity() {
        for i in 0..200 {
            let [_, y, _] = twin_planes(&PointContext::new(i, 200, 17, 2.0));
            let expected = if i % 2 == 0 { 400.0 } else { -400.0 };
            assert_eq!(y, expected);
        }
    }
}
