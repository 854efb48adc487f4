//! Style: accent color and template choice.
//!
//! The template affects presentational chrome only; the flow algorithm is
//! identical for all three. Structural template variation is out of scope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An RGB color, serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses `#RRGGBB` (leading `#` optional).
    pub fn from_hex(raw: &str) -> Result<Self, String> {
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color '{raw}'"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| e.to_string())
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as 0.0–1.0 fractions, the form PDF color operators take.
    pub fn fractional(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

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

/// The accent choices offered by the builder UI. The first entry is the
/// default accent.
pub const ACCENT_PALETTE: [Rgb; 6] = [
    Rgb::new(0x25, 0x63, 0xEB),
    Rgb::new(0x10, 0xB9, 0x81),
    Rgb::new(0xF5, 0x9E, 0x0B),
    Rgb::new(0xEF, 0x44, 0x44),
    Rgb::new(0x8B, 0x5C, 0xF6),
    Rgb::new(0x06, 0xB6, 0xD4),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Creative,
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            "creative" => Ok(TemplateId::Creative),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub accent: Rgb,
    pub template: TemplateId,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            accent: ACCENT_PALETTE[0],
            template: TemplateId::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_round_trip() {
        let accent = Rgb::from_hex("#2563EB").unwrap();
        assert_eq!(accent, Rgb::new(0x25, 0x63, 0xEB));
        assert_eq!(accent.to_hex(), "#2563EB");
    }

    #[test]
    fn test_rgb_accepts_bare_hex() {
        assert_eq!(Rgb::from_hex("666666").unwrap(), Rgb::new(0x66, 0x66, 0x66));
    }

    #[test]
    fn test_rgb_rejects_malformed_input() {
        assert!(Rgb::from_hex("#25").is_err());
        assert!(Rgb::from_hex("#2563EG").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_rgb_fractional_channels() {
        let (r, g, b) = Rgb::new(255, 0, 102).fractional();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.4).abs() < 1e-2);
    }

    #[test]
    fn test_style_serializes_accent_as_hex() {
        let raw = serde_json::to_string(&Style::default()).unwrap();
        assert!(raw.contains("\"#2563EB\""), "got {raw}");
        assert!(raw.contains("\"classic\""), "got {raw}");
    }

    #[test]
    fn test_template_from_str_case_insensitive() {
        assert_eq!(TemplateId::from_str("Modern").unwrap(), TemplateId::Modern);
        assert_eq!(
            TemplateId::from_str("CREATIVE").unwrap(),
            TemplateId::Creative
        );
        assert!(TemplateId::from_str("brutalist").is_err());
    }

    #[test]
    fn test_default_accent_is_first_palette_entry() {
        assert_eq!(Style::default().accent, ACCENT_PALETTE[0]);
    }
}
