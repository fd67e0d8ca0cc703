//! RGB colours with hex parsing and linear interpolation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected #RRGGBB, got {0:?}")]
    BadFormat(String),
    #[error("invalid hex digits in {0:?}")]
    BadDigits(String),
}

/// Colour with floating-point channels in 0..=255
///
/// Channels stay fractional so repeated blending converges smoothly; rounding
/// happens only when the colour is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::BadFormat(hex.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigits(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(f32::from)
                .map_err(|_| ColorError::BadDigits(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Linear interpolation, `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Channels rounded and clamped to bytes
    pub fn to_bytes(self) -> [u8; 3] {
        let byte = |c: f32| c.round().clamp(0.0, 255.0) as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS functional notation, e.g. `rgb(255, 128, 0)`
    pub fn to_css(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("rgb({r}, {g}, {b})")
    }

    /// Largest per-channel difference
    pub fn distance(self, other: Rgb) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let gold = Rgb::from_hex("#FFD700").unwrap();
        assert_eq!(gold, Rgb::new(255.0, 215.0, 0.0));

        let no_hash = Rgb::from_hex("43a047").unwrap();
        assert_eq!(no_hash.to_bytes(), [0x43, 0xa0, 0x47]);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(
            Rgb::from_hex("#FFF"),
            Err(ColorError::BadFormat("#FFF".to_string()))
        );
        assert_eq!(
            Rgb::from_hex("#GG0000"),
            Err(ColorError::BadDigits("#GG0000".to_string()))
        );
        assert!(Rgb::from_hex("#ÿÿÿ").is_err());
        // from_str_radix alone would take these as signed digits
        assert_eq!(
            Rgb::from_hex("#+f+f+f"),
            Err(ColorError::BadDigits("#+f+f+f".to_string()))
        );
    }

    #[test]
    fn test_hex_and_css_output() {
        let orange = Rgb::new(255.0, 165.0, 0.0);
        assert_eq!(orange.to_hex(), "#ffa500");
        assert_eq!(orange.to_css(), "rgb(255, 165, 0)");
        assert_eq!(Rgb::new(0.4, 127.5, 300.0).to_bytes(), [0, 128, 255]);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let red = Rgb::from_hex("#ff0000").unwrap();
        let orange = Rgb::from_hex("#ff8000").unwrap();
        assert_eq!(red.lerp(orange, 0.0), red);
        assert_eq!(red.lerp(orange, 1.0), orange);
        assert_eq!(red.lerp(orange, 0.5).to_css(), "rgb(255, 64, 0)");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let color: Rgb = serde_json::from_str("\"#2E7D32\"").unwrap();
        assert_eq!(color.to_bytes(), [0x2e, 0x7d, 0x32]);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#2e7d32\"");
        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }
}
