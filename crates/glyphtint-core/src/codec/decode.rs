// crates/glyphtint-core/src/codec/decode.rs

use crate::codec::channel::decode_channel;
use crate::codec::sentinel::is_glyph_sentinel;
use crate::color::Rgb;
use crate::effect::{EffectKind, TextEffect};

/// Reference decoder matching the game client: recover the effect triple
/// from a rendered color's low nibbles.
///
/// Returns `None` when the color carries no encoding: a reserved-marker red
/// channel, or any channel whose low nibble is 0 ("no data") or the reserved
/// gap value. Every [`super::encode::encode_text_effect`] output decodes.
pub fn decode_text_effect(color: Rgb) -> Option<TextEffect> {
    if is_glyph_sentinel(color.r) {
        return None;
    }
    let effect = EffectKind::from_id(decode_channel(color.r)?);
    let speed = decode_channel(color.g)?;
    let param = decode_channel(color.b)?;
    Some(TextEffect::new(effect, speed, param))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_colors_carry_nothing() {
        // Low nibble 0 on every channel.
        assert_eq!(decode_text_effect(Rgb::new(0xF0, 0xF0, 0xF0)), None);
        // Reserved gap nibble.
        assert_eq!(decode_text_effect(Rgb::new(0xF5, 0xF1, 0xF1)), None);
    }

    #[test]
    fn marker_reds_never_decode() {
        for red in [254u8, 62, 63, 64] {
            assert_eq!(decode_text_effect(Rgb::new(red, 0xF1, 0xF1)), None);
        }
    }
}
