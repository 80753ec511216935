// crates/glyphtint-core/src/codec/mod.rs
//
// Low-nibble color-channel codec. Packs (effect id, speed, param) into the
// least-significant 4 bits of R, G, B. Every constant here is part of the
// wire contract with the game-client decoder and must not change.

pub mod channel;
pub mod decode;
pub mod encode;
pub mod nibble;
pub mod sentinel;

/// Low bits carried per channel.
pub const LSB_BITS: u32 = 4;

/// Mask over the carried bits (bits 0-3).
pub const LOW_MASK: u8 = 0x0F;

/// Payload width: values are reduced to 3 bits before encoding.
pub const DATA_MASK: u8 = 0x07;

/// Smallest emitted nibble. Nibble 0 means "no data" to the decoder.
pub const DATA_MIN: u8 = 1;

/// Reserved nibble the encoder must skip over.
pub const DATA_GAP: u8 = 5;

/// Red value the client reads as an animated-glyph marker.
pub const GLYPH_MARKER_RED: u8 = 254;

/// Red band the client reads as gradient markers.
pub const GRADIENT_RED_LO: u8 = 62;
pub const GRADIENT_RED_HI: u8 = 64;

/// Delta applied to a red channel that lands on a marker value.
pub const SENTINEL_SHIFT: u8 = 16;
