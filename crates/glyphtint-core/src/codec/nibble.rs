// crates/glyphtint-core/src/codec/nibble.rs

use crate::codec::{DATA_GAP, DATA_MASK, DATA_MIN};

/// Encode a 3-bit payload as a non-zero nibble that also skips the
/// reserved value [`DATA_GAP`].
///
/// Maps 0..=7 bijectively onto {1,2,3,4,6,7,8,9}. Inputs wider than 3 bits
/// are masked first, so the function is total.
#[inline]
pub fn encode_nibble(data: u8) -> u8 {
    let mut encoded = (data & DATA_MASK) + DATA_MIN;
    if encoded >= DATA_GAP {
        encoded += 1;
    }
    encoded
}

/// Inverse of [`encode_nibble`] on its image.
///
/// Nibble 0 means "no data" and nibble [`DATA_GAP`] is reserved by the
/// client for another purpose; both decode to `None`. Anything else folds
/// back across the gap, drops [`DATA_MIN`], and is masked to 3 bits.
#[inline]
pub fn decode_nibble(nibble: u8) -> Option<u8> {
    if nibble == 0 || nibble == DATA_GAP {
        return None;
    }
    let mut v = nibble;
    if v > DATA_GAP {
        v -= 1;
    }
    Some((v - DATA_MIN) & DATA_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_is_one_through_nine_minus_five() {
        let image: Vec<u8> = (0u8..=7).map(encode_nibble).collect();
        assert_eq!(image, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn injective_over_payload_range() {
        for a in 0u8..=7 {
            for b in 0u8..=7 {
                if a != b {
                    assert_ne!(encode_nibble(a), encode_nibble(b), "a={a} b={b}");
                }
            }
        }
    }

    #[test]
    fn wide_inputs_are_masked() {
        assert_eq!(encode_nibble(8), encode_nibble(0));
        assert_eq!(encode_nibble(0xFF), encode_nibble(7));
    }

    #[test]
    fn decode_inverts_encode() {
        for data in 0u8..=7 {
            assert_eq!(decode_nibble(encode_nibble(data)), Some(data));
        }
    }

    #[test]
    fn reserved_nibbles_decode_to_none() {
        assert_eq!(decode_nibble(0), None);
        assert_eq!(decode_nibble(5), None);
    }
}
