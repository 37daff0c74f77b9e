//! Spheres, tori, shells and closed surfaces.

use std::f64::consts::PI;

use super::PointContext;

/// Points on a sphere of radius `r` at Fibonacci angles
fn on_sphere(r: f64, phi: f64, theta: f64) -> [f64; 3] {
    [
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    ]
}

/// Points on a shell of radius `r` at the shared `(u, v)` angles
fn on_shell(r: f64, c: &PointContext) -> [f64; 3] {
    [
        r * c.u.cos() * c.v.sin(),
        r * c.u.sin() * c.v.sin(),
        r * c.v.cos(),
    ]
}

pub fn fibonacci_sphere(c: &PointContext) -> [f64; 3] {
    let (phi, theta) = c.fibonacci();
    on_sphere(300.0 + (c.seed % 200) as f64, phi, theta)
}

pub fn light_cylinder(c: &PointContext) -> [f64; 3] {
    let r = 300.0;
    let y = (c.seeded_random(c.fi(), 0.0) * 2.0 - 1.0) * 1000.0;
    [r * c.u.cos(), y, r * c.u.sin()]
}

pub fn torus(c: &PointContext) -> [f64; 3] {
    let major = 300.0;
    let minor = 100.0;
    let ring = major + minor * c.v.cos();
    [ring * c.u.cos(), minor * c.v.sin(), ring * c.u.sin()]
}

pub fn pulse_sphere(c: &PointContext) -> [f64; 3] {
    let r = 250.0 + (c.fi() * 0.01 + c.s() * 0.01).sin() * 100.0;
    let (phi, theta) = c.fibonacci();
    on_sphere(r, phi, theta)
}

pub fn plasma_globe(c: &PointContext) -> [f64; 3] {
    let r = 300.0 + c.seeded_random(c.fi(), 0.0) * 50.0;
    on_shell(r, c)
}

pub fn mobius_strip(c: &PointContext) -> [f64; 3] {
    let radius = 200.0;
    let width = 100.0;
    let a = c.t * PI * 2.0;
    let w = ((c.i % 50) as f64 / 50.0 - 0.5) * width;
    let half = a / 2.0;
    [
        (radius + w * half.cos()) * a.cos(),
        w * half.sin(),
        (radius + w * half.cos()) * a.sin(),
    ]
}

pub fn saturn_ring(c: &PointContext) -> [f64; 3] {
    let major = 350.0;
    let minor = 80.0 + (c.fi() * 0.05).sin() * 20.0;
    let ring = major + minor * c.v.cos();
    [
        ring * c.u.cos(),
        minor * c.v.sin() + (c.u * 3.0).sin() * 30.0,
        ring * c.u.sin(),
    ]
}

pub fn sonic_sphere(c: &PointContext) -> [f64; 3] {
    let r = 300.0 + (c.fi() * 0.02 + c.s() * 0.01).sin() * 100.0;
    let freq = 5.0 + (c.seed % 10) as f64;
    let [x, y, z] = on_shell(r, c);
    [x, y + (c.fi() * freq * 0.01).sin() * 50.0, z]
}

pub fn force_field(c: &PointContext) -> [f64; 3] {
    let r = 400.0 + c.seeded_random(c.fi(), 0.0) * 100.0;
    on_shell(r, c)
}

pub fn singularity(c: &PointContext) -> [f64; 3] {
    let r = (c.n() - c.fi()) * 0.5;
    let (phi, theta) = c.fibonacci();
    on_sphere(r, phi, theta)
}

pub fn void_shell(c: &PointContext) -> [f64; 3] {
    let r = 350.0 + (c.seeded_random(c.fi(), 0.0) - 0.5) * 50.0;
    on_shell(r, c)
}

pub fn gravity_well(c: &PointContext) -> [f64; 3] {
    let r = 100.0 + c.fi() * 0.5;
    let (phi, theta) = c.fibonacci();
    let bend = 1.0 / (1.0 + r / 300.0);
    [
        r * theta.cos() * phi.sin() * bend,
        r * theta.sin() * phi.sin() * bend,
        r * phi.cos(),
    ]
}

pub fn void_ring(c: &PointContext) -> [f64; 3] {
    let r = 350.0 + (c.fi() * 0.05).sin() * 30.0;
    let a = c.t * PI * 2.0;
    [r * a.cos(), (a * 3.0).sin() * 50.0, r * a.sin()]
}

pub fn warp_sphere(c: &PointContext) -> [f64; 3] {
    let r = 250.0 + c.seeded_random(c.fi(), 0.0) * 150.0;
    let (phi, theta) = c.fibonacci();
    let warp = 1.0 + (phi * 3.0).sin() * 0.3;
    [
        r * theta.cos() * phi.sin() * warp,
        r * theta.sin() * phi.sin() * warp,
        r * phi.cos(),
    ]
}

pub fn sonic_ring(c: &PointContext) -> [f64; 3] {
    let r = 300.0 + (c.fi() * 0.1 + c.s() * 0.01).sin() * 80.0;
    let a = c.t * PI * 2.0;
    [r * a.cos(), (a * 8.0).sin() * 50.0, r * a.sin()]
}

pub fn neon_sphere(c: &PointContext) -> [f64; 3] {
    let r = 250.0 + (c.fi() * 0.05 + c.s() * 0.01).sin() * 100.0;
    let (phi, theta) = c.fibonacci();
    let pulse = 1.0 + (c.fi() * 0.1).sin() * 0.2;
    on_sphere(r * pulse, phi, theta)
}
