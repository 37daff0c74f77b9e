//! Shareable 1080x1920 poster built from a captured frame.
//!
//! The frame fills the 1080x1500 image area (aspect-fill, centred). Below it
//! sits a translucent caption band with an accent stripe in the realm color.
//! Caption text is carried alongside as [`PosterCaption`].

use image::{imageops, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PosterError;
use crate::realm::RealmDescriptor;

pub const POSTER_WIDTH: u32 = 1080;
pub const POSTER_HEIGHT: u32 = 1920;

/// Height of the image area above the caption band
pub const IMAGE_AREA_HEIGHT: u32 = 1500;

/// Caption band opacity (black)
const BAND_ALPHA: f32 = 0.7;

const STRIPE_HEIGHT: u32 = 6;

pub const POSTER_FOOTER: &str = "DJ SMOKE STREAM // MATRIX v9.0";

/// Where a source image lands inside a target area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Aspect-fill `source` into `target`, centred on the overflowing axis
pub fn fit_cover(source: (u32, u32), target: (u32, u32)) -> Placement {
    let source_aspect = source.0 as f64 / source.1.max(1) as f64;
    let (tw, th) = (target.0 as f64, target.1 as f64);
    let target_aspect = tw / th;

    if source_aspect > target_aspect {
        let width = source_aspect * th;
        Placement {
            x: (tw - width) / 2.0,
            y: 0.0,
            width,
            height: th,
        }
    } else {
        let height = tw / source_aspect;
        Placement {
            x: 0.0,
            y: (th - height) / 2.0,
            width: tw,
            height,
        }
    }
}

/// Text lines printed in the caption band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterCaption {
    pub title: String,
    pub dna: String,
    pub realm: String,
    pub footer: String,
}

impl PosterCaption {
    pub fn new(track: &str, realm: &RealmDescriptor) -> Self {
        Self {
            title: poster_title(track),
            dna: format!("NEURAL_DNA: {}", realm.dna_label()),
            realm: format!("REALM: {}", realm.realm_name),
            footer: POSTER_FOOTER.to_string(),
        }
    }
}

/// Display title: first `.mp3` removed, underscores to spaces, upper-case
pub fn poster_title(track: &str) -> String {
    track.replacen(".mp3", "", 1).replace('_', " ").to_uppercase()
}

/// Lay `frame` out on a black poster canvas
pub fn compose(frame: &RgbaImage, realm: &RealmDescriptor) -> RgbaImage {
    let mut poster = RgbaImage::from_pixel(POSTER_WIDTH, POSTER_HEIGHT, Rgba([0, 0, 0, 255]));

    let place = fit_cover(frame.dimensions(), (POSTER_WIDTH, IMAGE_AREA_HEIGHT));
    let width = place.width.round().max(1.0) as u32;
    let height = place.height.round().max(1.0) as u32;
    let scaled = imageops::resize(frame, width, height, imageops::FilterType::Triangle);
    imageops::replace(
        &mut poster,
        &scaled,
        place.x.round() as i64,
        place.y.round() as i64,
    );

    for y in IMAGE_AREA_HEIGHT..POSTER_HEIGHT {
        for x in 0..POSTER_WIDTH {
            let px = poster.get_pixel_mut(x, y);
            for c in &mut px.0[..3] {
                *c = (*c as f32 * (1.0 - BAND_ALPHA)).round() as u8;
            }
        }
    }

    let [r, g, b] = realm.color.to_rgb8();
    for y in IMAGE_AREA_HEIGHT..IMAGE_AREA_HEIGHT + STRIPE_HEIGHT {
        for x in 0..POSTER_WIDTH {
            poster.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    poster
}

/// Write `poster` as `<dir>/<track stem>-<dna>.png`
pub fn save(
    poster: &RgbaImage,
    dir: &Path,
    track: &str,
    realm: &RealmDescriptor,
) -> Result<PathBuf, PosterError> {
    fs::create_dir_all(dir)?;
    let stem = Path::new(track)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("realm");
    let path = dir.join(format!("{stem}-{}.png", realm.dna_label()));
    poster.save(&path)?;
    Ok(path)
}
