//! Seed -> accent color.

use serde::{Serialize, Serializer};

const SATURATION: f64 = 0.8;
const LIGHTNESS: f64 = 0.5;

/// Realm accent color, channels in 0..1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealmColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RealmColor {
    /// `#rrggbb`
    pub fn hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// 8-bit channels; alpha is not part of the palette
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Shader-ready channels
    pub fn to_array(&self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl Serialize for RealmColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Hue from the seed, fixed saturation 0.8 and lightness 0.5
pub fn color_from_seed(seed: u32) -> RealmColor {
    let hue = (seed % 360) as f64 / 360.0;
    let [r, g, b] = hsl_to_rgb(hue, SATURATION, LIGHTNESS);
    RealmColor { r, g, b }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;
    [
        hue_to_rgb(q, p, h + 1.0 / 3.0),
        hue_to_rgb(q, p, h),
        hue_to_rgb(q, p, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}
