// crates/glyphtint-core/src/codec/channel.rs

use crate::codec::nibble::{decode_nibble, encode_nibble};
use crate::codec::LOW_MASK;

/// Overwrite the low nibble of `base` with the encoded payload.
///
/// The high nibble of `base` survives byte-identical, so the color shifts
/// by at most least-significant-bit granularity.
#[inline]
pub fn encode_channel(base: u8, data: u8) -> u8 {
    (base & !LOW_MASK) | encode_nibble(data)
}

/// Recover the 3-bit payload carried in a channel's low nibble, if any.
#[inline]
pub fn decode_channel(channel: u8) -> Option<u8> {
    decode_nibble(channel & LOW_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_nibble_preserved_for_all_bases() {
        for base in 0u8..=255 {
            for data in 0u8..=7 {
                let enc = encode_channel(base, data);
                assert_eq!(enc & 0xF0, base & 0xF0, "base={base} data={data}");
            }
        }
    }

    #[test]
    fn channel_round_trip() {
        for base in [0u8, 0x30, 0x7F, 0xF0, 0xFF] {
            for data in 0u8..=7 {
                assert_eq!(decode_channel(encode_channel(base, data)), Some(data));
            }
        }
    }
}
