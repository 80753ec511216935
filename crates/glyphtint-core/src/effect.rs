// crates/glyphtint-core/src/effect.rs
//
// The fixed palette of 8 text animations the game client can play.
// Effect ids are 3 bits on the wire and WRAP (mask), while speed/param
// SATURATE (clamp) — the asymmetry is part of the wire contract.

use crate::codec::DATA_MASK;
use crate::error::{Result, TintError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectKind {
    Wave = 0,
    Shake = 1,
    Rainbow = 2,
    Fade = 3,
    Bounce = 4,
    Glitch = 5,
    Pulse = 6,
    Sparkle = 7,
}

impl EffectKind {
    pub const ALL: [EffectKind; 8] = [
        EffectKind::Wave,
        EffectKind::Shake,
        EffectKind::Rainbow,
        EffectKind::Fade,
        EffectKind::Bounce,
        EffectKind::Glitch,
        EffectKind::Pulse,
        EffectKind::Sparkle,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Total: ids wrap modulo 8 rather than clamping.
    #[inline]
    pub const fn from_id(id: u8) -> EffectKind {
        Self::ALL[(id & DATA_MASK) as usize]
    }

    pub fn from_name(name: &str) -> Result<EffectKind> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name() == lower)
            .ok_or_else(|| TintError::Validation(format!("unknown effect: {name:?}")))
    }

    pub const fn name(self) -> &'static str {
        match self {
            EffectKind::Wave => "wave",
            EffectKind::Shake => "shake",
            EffectKind::Rainbow => "rainbow",
            EffectKind::Fade => "fade",
            EffectKind::Bounce => "bounce",
            EffectKind::Glitch => "glitch",
            EffectKind::Pulse => "pulse",
            EffectKind::Sparkle => "sparkle",
        }
    }

    /// What the effect-specific `param` value controls.
    pub const fn param_hint(self) -> &'static str {
        match self {
            EffectKind::Wave => "amplitude",
            EffectKind::Shake => "jitter radius",
            EffectKind::Rainbow => "hue spread",
            EffectKind::Fade => "minimum opacity",
            EffectKind::Bounce => "bounce height",
            EffectKind::Glitch => "corruption rate",
            EffectKind::Pulse => "scale delta",
            EffectKind::Sparkle => "density",
        }
    }
}

/// One decoded parameter triple: which animation, how fast, and the
/// effect-specific auxiliary value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextEffect {
    pub effect: EffectKind,
    pub speed: u8,
    pub param: u8,
}

impl TextEffect {
    pub const fn new(effect: EffectKind, speed: u8, param: u8) -> Self {
        Self {
            effect,
            speed,
            param,
        }
    }

    /// Saturate speed to 1..=7 and param to 0..=7 (the encodable ranges).
    pub fn clamped(self) -> Self {
        Self {
            effect: self.effect,
            speed: self.speed.clamp(1, DATA_MASK),
            param: self.param.min(DATA_MASK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_wrap_modulo_8() {
        assert_eq!(EffectKind::from_id(0), EffectKind::Wave);
        assert_eq!(EffectKind::from_id(7), EffectKind::Sparkle);
        assert_eq!(EffectKind::from_id(8), EffectKind::Wave);
        assert_eq!(EffectKind::from_id(255), EffectKind::Sparkle);
    }

    #[test]
    fn names_round_trip() {
        for e in EffectKind::ALL {
            assert_eq!(EffectKind::from_name(e.name()).unwrap(), e);
        }
        assert_eq!(EffectKind::from_name("RAINBOW").unwrap(), EffectKind::Rainbow);
        assert!(EffectKind::from_name("spin").is_err());
    }

    #[test]
    fn clamped_saturates() {
        let fx = TextEffect::new(EffectKind::Wave, 0, 99).clamped();
        assert_eq!((fx.speed, fx.param), (1, 7));
    }
}
