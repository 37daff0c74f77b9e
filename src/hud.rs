//! Now-playing status line shown in the window title.

use crate::realm::{RealmDescriptor, IDLE_REALM_NAME};

/// DNA label shown before any track is selected
pub const IDLE_DNA: &str = "0x000000";

/// `NEURAL_LINK | DNA: 0x293B2B | REALM: DATA_SPIRAL | SYNC: 12.30`
pub fn status_line(realm: Option<&RealmDescriptor>, sync: f32) -> String {
    let (dna, name) = match realm {
        Some(realm) => (realm.dna_label(), realm.realm_name),
        None => (IDLE_DNA.to_string(), IDLE_REALM_NAME),
    };
    format!("NEURAL_LINK | DNA: {dna} | REALM: {name} | SYNC: {sync:.2}")
}

/// Window title: base title plus status line
pub fn window_title(base: &str, realm: Option<&RealmDescriptor>, sync: f32) -> String {
    format!("{base} | {}", status_line(realm, sync))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_status() {
        assert_eq!(
            status_line(None, 0.0),
            "NEURAL_LINK | DNA: 0x000000 | REALM: VOID_CLOUD | SYNC: 0.00"
        );
    }

    #[test]
    fn test_active_status() {
        let realm = RealmDescriptor::for_track("galaxy.mp3");
        assert_eq!(
            status_line(Some(&realm), 12.3),
            "NEURAL_LINK | DNA: 0x293B2B | REALM: DATA_SPIRAL | SYNC: 12.30"
        );
    }

    #[test]
    fn test_window_title_prefix() {
        assert!(window_title("Smoke Matrix", None, 1.0).starts_with("Smoke Matrix | NEURAL_LINK"));
    }
}
