//! Realm identity: seed, variant selection, palette and display metadata.

mod names;
mod palette;
mod seed;

use serde::Serialize;

use crate::geometry::{RealmConfig, VARIANT_COUNT};

pub use names::{IDLE_REALM_NAME, REALM_NAMES};
pub use palette::{color_from_seed, RealmColor};
pub use seed::hash_string;

/// Metadata emitted on every rebuild.
///
/// Invariants: `mode == seed % VARIANT_COUNT` and `color == color_from_seed(seed)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealmDescriptor {
    pub seed: u32,
    pub mode: usize,
    pub realm_name: &'static str,
    pub color: RealmColor,
}

impl RealmDescriptor {
    /// Derive the full realm identity from a seed
    pub fn from_seed(seed: u32) -> Self {
        let mode = select_mode(seed);
        Self {
            seed,
            mode,
            realm_name: realm_name(mode),
            color: color_from_seed(seed),
        }
    }

    /// Derive the realm identity for a track name
    pub fn for_track(track: &str) -> Self {
        Self::from_seed(hash_string(track))
    }

    /// `0x` plus the first six upper-case hex digits of the seed
    pub fn dna_label(&self) -> String {
        let hex = format!("{:X}", self.seed);
        format!("0x{}", &hex[..hex.len().min(6)])
    }

    /// Point size in pixels, 2..=6
    pub fn particle_size(&self) -> f32 {
        particle_size(self.seed)
    }

    /// Number of particles, 12000..18000
    pub fn particle_count(&self) -> usize {
        particle_count(self.seed)
    }

    /// Geometry request for this realm
    pub fn geometry(&self) -> RealmConfig {
        RealmConfig {
            mode: self.mode,
            count: self.particle_count(),
            seed: self.seed,
            particle_size: self.particle_size(),
        }
    }
}

/// Variant index for a seed
pub fn select_mode(seed: u32) -> usize {
    seed as usize % VARIANT_COUNT
}

/// Display name for a variant index
///
/// # Panics
/// If `mode >= VARIANT_COUNT`.
pub fn realm_name(mode: usize) -> &'static str {
    REALM_NAMES[mode]
}

pub fn particle_size(seed: u32) -> f32 {
    2.0 + (seed % 5) as f32
}

pub fn particle_count(seed: u32) -> usize {
    12000 + (seed % 6000) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_134_selects_first_variant() {
        let realm = RealmDescriptor::from_seed(134);
        assert_eq!(realm.mode, 0);
        assert_eq!(realm.realm_name, REALM_NAMES[0]);
        assert_eq!(realm.realm_name, "TORUS_KNOT");
    }

    #[test]
    fn test_galaxy_track() {
        let realm = RealmDescriptor::for_track("galaxy.mp3");
        assert_eq!(realm.seed, 691_743_506);
        assert_eq!(realm.mode, 63);
        assert_eq!(realm.realm_name, "DATA_SPIRAL");
        assert_eq!(realm.color.hex(), "#7219e6");
        assert_eq!(realm.dna_label(), "0x293B2B");
        assert_eq!(realm.particle_size(), 3.0);
        assert_eq!(realm.particle_count(), 12000 + 691_743_506 % 6000);
    }

    #[test]
    fn test_dna_label_short_seed() {
        assert_eq!(RealmDescriptor::from_seed(0xAB).dna_label(), "0xAB");
    }

    #[test]
    fn test_geometry_request_matches_descriptor() {
        let realm = RealmDescriptor::for_track("hello");
        let request = realm.geometry();
        assert_eq!(request.mode, realm.mode);
        assert_eq!(request.seed, realm.seed);
        assert!((12000..18000).contains(&request.count));
        assert!((2.0..=6.0).contains(&request.particle_size));
    }

    proptest! {
        #[test]
        fn prop_mode_is_in_range(seed in any::<u32>()) {
            let realm = RealmDescriptor::from_seed(seed);
            prop_assert!(realm.mode < VARIANT_COUNT);
            prop_assert_eq!(realm.mode, seed as usize % VARIANT_COUNT);
            prop_assert_eq!(realm.realm_name, REALM_NAMES[realm.mode]);
            prop_assert_eq!(realm.color, color_from_seed(seed));
        }

        #[test]
        fn prop_track_identity_is_reproducible(name in "[a-zA-Z0-9_ .-]{0,40}") {
            prop_assert_eq!(RealmDescriptor::for_track(&name), RealmDescriptor::for_track(&name));
        }
    }
}
