// crates/glyphtint-core/src/codec/sentinel.rs
//
// The client reads red=254 as an animated-glyph marker and red in 62..=64
// as gradient markers. An emitted red channel must never land on those
// exact bytes, so collisions are shifted a full 16 away. The shift keeps
// the low nibble intact, so decoding still works after it.

use crate::codec::{GLYPH_MARKER_RED, GRADIENT_RED_HI, GRADIENT_RED_LO, SENTINEL_SHIFT};

/// Move an encoded red channel off the client's reserved marker values.
/// Applied to red only, after nibble encoding.
#[inline]
pub fn avoid_glyph_sentinels(red: u8) -> u8 {
    if red == GLYPH_MARKER_RED {
        red - SENTINEL_SHIFT
    } else if (GRADIENT_RED_LO..=GRADIENT_RED_HI).contains(&red) {
        red + SENTINEL_SHIFT
    } else {
        red
    }
}

/// True when a red channel is one of the client's reserved marker values
/// and therefore cannot carry this encoding.
#[inline]
pub fn is_glyph_sentinel(red: u8) -> bool {
    red == GLYPH_MARKER_RED || (GRADIENT_RED_LO..=GRADIENT_RED_HI).contains(&red)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_values_shift_by_sixteen() {
        assert_eq!(avoid_glyph_sentinels(254), 238);
        assert_eq!(avoid_glyph_sentinels(62), 78);
        assert_eq!(avoid_glyph_sentinels(63), 79);
        assert_eq!(avoid_glyph_sentinels(64), 80);
    }

    #[test]
    fn identity_everywhere_else() {
        for red in 0u8..=255 {
            if is_glyph_sentinel(red) {
                continue;
            }
            assert_eq!(avoid_glyph_sentinels(red), red);
        }
    }

    #[test]
    fn shift_preserves_low_nibble() {
        for red in [254u8, 62, 63, 64] {
            assert_eq!(avoid_glyph_sentinels(red) & 0x0F, red & 0x0F);
        }
    }
}
