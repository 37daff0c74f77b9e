//! Track name -> seed.

/// Deterministic seed for a track name.
///
/// Folds UTF-16 code units with `hash = code + ((hash << 5) - hash)` in
/// wrapping 32-bit signed arithmetic, then takes the absolute value.
/// Collisions between names are allowed.
pub fn hash_string(name: &str) -> u32 {
    let hash = name.encode_utf16().fold(0i32, |hash, code| {
        (code as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_fixture() {
        assert_eq!(hash_string("galaxy.mp3"), 691_743_506);
    }

    #[test]
    fn test_small_inputs() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        assert_eq!(hash_string("abc"), 96_354);
        assert_eq!(hash_string("hello"), 99_162_322);
    }

    #[test]
    fn test_wraps_like_i32() {
        // Long input overflows many times; result must still match the
        // 32-bit fold computed by hand.
        let name = "Midnight_Drive.mp3";
        let mut hash: i32 = 0;
        for code in name.encode_utf16() {
            hash = hash.wrapping_mul(31).wrapping_add(code as i32);
        }
        assert_eq!(hash_string(name), hash.unsigned_abs());
        assert_eq!(hash_string(name), 294_694_435);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // U+1F30C is a surrogate pair: two code units folded separately
        let expected = {
            let hi = 0xD83Ci32;
            let lo = 0xDF0Ci32;
            (hi.wrapping_mul(31).wrapping_add(lo)).unsigned_abs()
        };
        assert_eq!(hash_string("\u{1F30C}"), expected);
    }

    proptest! {
        #[test]
        fn prop_hash_is_stable(name in ".*") {
            prop_assert_eq!(hash_string(&name), hash_string(&name.clone()));
        }
    }
}
