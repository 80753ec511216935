pub mod error;

pub mod codec;
pub mod color;
pub mod effect;

pub use crate::codec::decode::decode_text_effect;
pub use crate::codec::encode::{encode, encode_text_effect, EncodedColor};
pub use crate::color::Rgb;
pub use crate::effect::{EffectKind, TextEffect};
