// crates/glyphtint-core/src/color.rs

use crate::error::{Result, TintError};

/// An RGB triplet, one byte per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback color for malformed hex input.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical hex form: uppercase `#RRGGBB`, two digits per channel.
    ///
    /// This exact casing and padding is what downstream tooling pastes into
    /// formatting markup, so it must stay stable.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` (leading `#` optional, case-insensitive).
    ///
    /// Malformed input degrades to [`Rgb::WHITE`]. UI callers feed this from
    /// free-form text fields and expect a usable color back, never an error.
    pub fn parse_hex_lossy(s: &str) -> Rgb {
        Self::parse_hex(s).unwrap_or(Rgb::WHITE)
    }

    /// Strict variant of [`Rgb::parse_hex_lossy`] for CLI input, where a typo
    /// should be reported instead of silently encoding white.
    pub fn parse_hex(s: &str) -> Result<Rgb> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(TintError::Validation(format!(
                "expected #RRGGBB, got {s:?}"
            )));
        }
        let byte = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| TintError::Validation(format!("non-hex digit in {s:?}")))
        };
        Ok(Rgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_zero_padded() {
        assert_eq!(Rgb::new(1, 10, 255).to_hex(), "#010AFF");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn parse_accepts_both_cases_and_optional_hash() {
        assert_eq!(Rgb::parse_hex_lossy("#ffffff"), Rgb::WHITE);
        assert_eq!(Rgb::parse_hex_lossy("a0B1c2"), Rgb::new(0xA0, 0xB1, 0xC2));
    }

    #[test]
    fn malformed_input_falls_back_to_white() {
        assert_eq!(Rgb::parse_hex_lossy("not-a-color"), Rgb::WHITE);
        assert_eq!(Rgb::parse_hex_lossy("#fff"), Rgb::WHITE);
        assert_eq!(Rgb::parse_hex_lossy(""), Rgb::WHITE);
        assert_eq!(Rgb::parse_hex_lossy("#12345G"), Rgb::WHITE);
    }

    #[test]
    fn strict_parse_rejects_what_lossy_swallows() {
        assert!(Rgb::parse_hex("not-a-color").is_err());
        assert!(Rgb::parse_hex("#1234567").is_err());
        assert_eq!(Rgb::parse_hex("#00FF7f").unwrap(), Rgb::new(0, 255, 127));
    }
}
