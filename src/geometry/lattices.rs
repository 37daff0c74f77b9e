//! Grids, lattices, columns and other index-tiled layouts.

use std::f64::consts::PI;

use super::PointContext;

pub fn wave_grid(c: &PointContext) -> [f64; 3] {
    let width = 120;
    let spacing = 15.0;
    let half = (width as f64 * spacing) / 2.0;
    [
        (c.i % width) as f64 * spacing - half,
        (c.fi() * 0.05 + c.s() * 0.01).sin() * 100.0,
        (c.i / width) as f64 * spacing - half,
    ]
}

pub fn crystal_lattice(c: &PointContext) -> [f64; 3] {
    let size = 20;
    let spacing = 40.0;
    let half = (size as f64 * spacing) / 2.0;
    [
        (c.i % size) as f64 * spacing - half,
        ((c.i / size) % size) as f64 * spacing - half,
        ((c.i / (size * size)) % size) as f64 * spacing - half,
    ]
}

pub fn data_columns(c: &PointContext) -> [f64; 3] {
    let columns = 50;
    [
        (c.i % columns) as f64 * 30.0 - (columns as f64 * 15.0),
        c.seeded_random(c.fi(), 0.0) * 1500.0 - 750.0,
        (c.i / columns) as f64 * 30.0 - 750.0,
    ]
}

pub fn eight_branch(c: &PointContext) -> [f64; 3] {
    let band = c.n() / 8.0;
    let branch = (c.fi() / band).floor();
    let angle = (branch / 8.0) * PI * 2.0;
    let dist = (c.fi() % band) * 2.0;
    [
        dist * angle.cos(),
        c.fi() * 1.5 - c.n() * 0.75,
        dist * angle.sin(),
    ]
}

pub fn terrain_mesh(c: &PointContext) -> [f64; 3] {
    let size = 40;
    let x = (c.i % size) as f64 * 40.0 - (size as f64 * 20.0);
    let z = (c.i / size) as f64 * 40.0 - (size as f64 * 20.0);
    let y = (x * 0.05 + c.s() * 0.001).sin() * 50.0 + (z * 0.05).cos() * 50.0;
    [x, y, z]
}

pub fn ocean_waves(c: &PointContext) -> [f64; 3] {
    let wave_len = c.n() / 10.0;
    [
        (c.fi() % wave_len) * 10.0 - (wave_len * 5.0),
        (c.fi() * 0.1 + c.s() * 0.01).sin() * 200.0,
        (c.fi() * 0.05).cos() * 150.0 + ((c.fi() / wave_len).floor() * 50.0 - 250.0),
    ]
}

pub fn crystal_cave(c: &PointContext) -> [f64; 3] {
    let (w, h, d) = (30, 30, 30);
    let x = (c.i % w) as f64 * 40.0 - (w as f64 * 20.0);
    let y = ((c.i / w) % h) as f64 * 40.0 - (h as f64 * 20.0);
    let z = ((c.i / (w * h)) % d) as f64 * 40.0 - (d as f64 * 20.0);
    let growth = c.seeded_random(c.fi(), 0.0) * 50.0;
    [x + growth, y, z]
}

pub fn laser_grid(c: &PointContext) -> [f64; 3] {
    let vertical = c.i % 2 == 0;
    let along = (c.i % 50) as f64 * 40.0 - 1000.0;
    let across = (c.i / 50) as f64 * 40.0 - 400.0;
    let y = c.seeded_random(c.fi(), 0.0) * 200.0 - 100.0;
    if vertical {
        [across, y, along]
    } else {
        [along, y, across]
    }
}

pub fn byte_stream(c: &PointContext) -> [f64; 3] {
    let stream = (c.i % 8) as f64;
    [
        (stream - 4.0) * 100.0,
        (c.fi() - c.n() / 2.0) * 1.5,
        (c.fi() * 0.1 + stream).sin() * 50.0,
    ]
}

pub fn beam_array(c: &PointContext) -> [f64; 3] {
    [
        ((c.i % 10) as f64 - 5.0) * 50.0,
        (c.fi() - c.n() / 2.0) * 2.0 + (c.fi() * 0.05).sin() * 30.0,
        (((c.i / 10) % 10) as f64 - 5.0) * 50.0,
    ]
}

pub fn flux_field(c: &PointContext) -> [f64; 3] {
    let x = (c.i % 50) as f64 * 40.0 - 1000.0;
    let z = (c.i / 50) as f64 * 40.0 - 400.0;
    let y = (x * 0.05 + c.s() * 0.001).sin() * 100.0 + (z * 0.05).cos() * 100.0;
    [x, y, z]
}

pub fn pulse_cube(c: &PointContext) -> [f64; 3] {
    let size = 300.0;
    let x = ((c.i % 20) as f64 / 20.0 - 0.5) * size;
    let y = (((c.i / 20) % 20) as f64 / 20.0 - 0.5) * size;
    let z = (((c.i / 400) % 20) as f64 / 20.0 - 0.5) * size;
    let pulse = 1.0 + (c.fi() * 0.05 + c.s() * 0.01).sin() * 0.2;
    [x * pulse, y * pulse, z * pulse]
}

pub fn quantum_foam(c: &PointContext) -> [f64; 3] {
    let x = (c.i % 40) as f64 * 30.0 - 600.0;
    let z = (c.i / 40) as f64 * 30.0 - 600.0;
    let y = (x * 0.05 + z * 0.05 + c.s() * 0.001).sin() * 200.0;
    let uncertainty = c.seeded_random(c.fi(), 0.0) * 50.0;
    [x + uncertainty, y, z + uncertainty]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crystal_lattice_wraps_every_cube() {
        let first = crystal_lattice(&PointContext::new(0, 20_000, 5, 2.0));
        let wrapped = crystal_lattice(&PointContext::new(8000, 20_000, 5, 2.0));
        assert_eq!(first, wrapped);
        assert_eq!(first, [-400.0, -400.0, -400.0]);
    }

    #[test]
    fn test_laser_grid_alternates_axes() {
        let even = laser_grid(&PointContext::new(100, 1000, 5, 2.0));
        let odd = laser_grid(&PointContext::new(101, 1000, 5, 2.0));
        // i=100: along=-1000, across=-320; i=101: along=-960, across=-320
        assert_eq!(even[0], -320.0);
        assert_eq!(even[2], -1000.0);
        assert_eq!(odd[0], -960.0);
        assert_eq!(odd[2], -320.0);
    }
}
