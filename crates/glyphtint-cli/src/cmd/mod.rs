// crates/glyphtint-cli/src/cmd/mod.rs

pub mod decode;
pub mod effects;
pub mod encode;
pub mod sweep;

use glyphtint_core::effect::EffectKind;

/// Accept an effect by name (`wave`) or by bare id (`0`). Ids wrap
/// modulo 8, same as on the wire.
pub fn parse_effect(s: &str) -> anyhow::Result<EffectKind> {
    if let Ok(id) = s.parse::<u8>() {
        return Ok(EffectKind::from_id(id));
    }
    Ok(EffectKind::from_name(s)?)
}
