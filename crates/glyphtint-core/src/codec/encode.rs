// crates/glyphtint-core/src/codec/encode.rs

use crate::codec::channel::encode_channel;
use crate::codec::sentinel::avoid_glyph_sentinels;
use crate::codec::DATA_MASK;
use crate::color::Rgb;
use crate::effect::TextEffect;

/// A color whose low nibbles carry an encoded effect triple.
///
/// Pure output value: recomputed whenever any input changes, never mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodedColor(Rgb);

impl EncodedColor {
    #[inline]
    pub fn rgb(self) -> Rgb {
        self.0
    }

    /// Canonical uppercase `#RRGGBB` code, ready to paste into markup.
    pub fn hex(self) -> String {
        self.0.to_hex()
    }
}

/// Pack an effect triple into the low nibbles of `base`.
///
/// Inputs are coerced, never rejected: the effect id wraps modulo 8 (the
/// palette cycles), while speed saturates to 1..=7 and param to 0..=7.
/// Two's-complement `&` makes negative ids wrap the same way.
pub fn encode_text_effect(base: Rgb, effect_id: i32, speed: i32, param: i32) -> EncodedColor {
    let effect = (effect_id & i32::from(DATA_MASK)) as u8;
    let speed = speed.clamp(1, i32::from(DATA_MASK)) as u8;
    let param = param.clamp(0, i32::from(DATA_MASK)) as u8;

    let r = avoid_glyph_sentinels(encode_channel(base.r, effect));
    let g = encode_channel(base.g, speed);
    let b = encode_channel(base.b, param);

    EncodedColor(Rgb::new(r, g, b))
}

/// Typed front end over [`encode_text_effect`] for callers that already
/// hold a validated [`TextEffect`].
pub fn encode(base: Rgb, fx: TextEffect) -> EncodedColor {
    let fx = fx.clamped();
    encode_text_effect(
        base,
        i32::from(fx.effect.id()),
        i32::from(fx.speed),
        i32::from(fx.param),
    )
}
