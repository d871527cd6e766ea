use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 8-bit sRGB triple as produced by a `#rrggbb` color picker.
pub type Rgb = Srgb<u8>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("`{0}` is not a 6-digit hex color")]
    InvalidHex(String),
}

/// Parse a strict `rrggbb` color, with or without a leading `#`.
///
/// Case-insensitive. Shorthand (`#fff`), alpha (`#rrggbbaa`) and anything
/// with surrounding whitespace is rejected.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// `rgba(r, g, b, opacity)` with the opacity in shortest decimal form.
pub fn rgba(rgb: Rgb, opacity: f64) -> String {
    format!("rgba({}, {}, {}, {})", rgb.red, rgb.green, rgb.blue, opacity)
}

/// CSS rgba color for a hex string, `None` when the hex doesn't parse.
pub fn shadow_color(hex: &str, opacity: f64) -> Option<String> {
    hex_to_rgb(hex).map(|rgb| rgba(rgb, opacity))
}

/// A color that is known to be a valid `#rrggbb` value.
///
/// Serializes as the lowercase `#rrggbb` string, which is also the format
/// `<input type="color">` reads and writes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: Self = Self(Srgb::new(0, 0, 0));
    pub const WHITE: Self = Self(Srgb::new(255, 255, 255));

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn rgb(self) -> Rgb {
        self.0
    }

    pub fn to_rgba(self, opacity: f64) -> String {
        rgba(self.0, opacity)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(hex)
            .map(Self)
            .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        hex.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_accepts_both_prefix_forms() {
        assert_eq!(hex_to_rgb("#000000"), Some(Srgb::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("ffffff"), Some(Srgb::new(255, 255, 255)));
        assert_eq!(hex_to_rgb("#1A2b3C"), Some(Srgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed_input() {
        assert_eq!(hex_to_rgb("xyz"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#ffffff00"), None);
        assert_eq!(hex_to_rgb("##ffffff"), None);
        assert_eq!(hex_to_rgb(" #ffffff"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        // Multi-byte chars must not slip through the length check.
        assert_eq!(hex_to_rgb("#ééé"), None);
    }

    #[test]
    fn test_shadow_color_formats_rgba() {
        assert_eq!(shadow_color("#000000", 0.2).as_deref(), Some("rgba(0, 0, 0, 0.2)"));
        assert_eq!(shadow_color("#ff8000", 0.07).as_deref(), Some("rgba(255, 128, 0, 0.07)"));
        assert_eq!(shadow_color("#ffffff", 0.0).as_deref(), Some("rgba(255, 255, 255, 0)"));
        assert_eq!(shadow_color("#ffffff", 1.0).as_deref(), Some("rgba(255, 255, 255, 1)"));
        assert_eq!(shadow_color("nope", 0.2), None);
    }

    #[test]
    fn test_hex_color_display_is_lowercase_with_prefix() {
        let color: HexColor = "ABCDEF".parse().unwrap();
        assert_eq!(color.to_string(), "#abcdef");
        assert_eq!(HexColor::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_hex_color_parse_error() {
        let error = "#12345".parse::<HexColor>().unwrap_err();
        assert_eq!(error, ColorError::InvalidHex("#12345".to_string()));
        assert_eq!(error.to_string(), "`#12345` is not a 6-digit hex color");
    }

    #[test]
    fn test_hex_color_serde_uses_hex_string() {
        let json = serde_json::to_string(&HexColor::new(221, 221, 221)).unwrap();
        assert_eq!(json, "\"#dddddd\"");

        let parsed: HexColor = serde_json::from_str("\"#DDDDDD\"").unwrap();
        assert_eq!(parsed, HexColor::new(221, 221, 221));

        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }
}
