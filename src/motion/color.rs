//! RGBA color with integer channels.

use std::fmt;
use std::str::FromStr;

use super::Interpolate;
use super::progress::interpolate_scalar;
use super::render;

/// An RGBA color.
///
/// Every channel is a plain integer and is interpolated the same way,
/// alpha included. Channel ranges are not validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl Color {
    /// Alpha assigned to colors built without an explicit alpha.
    pub const OPAQUE: i32 = 1;

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self::new(r, g, b, Self::OPAQUE)
    }

    /// Parse a `rrggbb` hex string, with or without `#`. The result is opaque.
    ///
    /// # Errors
    /// Returns an error if the hex string is invalid.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .map(i32::from)
                .ok_or_else(|| ColorParseError::InvalidHex(hex.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Interpolate for Color {
    fn interpolate(&self, end: &Self, fraction: f64) -> Self {
        Self {
            r: interpolate_scalar(self.r, end.r, fraction),
            g: interpolate_scalar(self.g, end.g, fraction),
            b: interpolate_scalar(self.b, end.b, fraction),
            a: interpolate_scalar(self.a, end.a, fraction),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::color_string(self))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Hex string has wrong length (expected 6 characters without #).
    #[error("invalid hex color length: {0} (expected 6)")]
    InvalidLength(usize),
    /// Hex string contains invalid characters.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#e135ff").unwrap(), Color::rgb(225, 53, 255));
        assert_eq!(Color::from_hex("80ffea").unwrap(), Color::rgb(128, 255, 234));
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::BLACK);
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(
            Color::from_hex("#fff"),
            Err(ColorParseError::InvalidLength(3))
        );
        assert_eq!(
            Color::from_hex("zz0000"),
            Err(ColorParseError::InvalidHex("zz0000".to_string()))
        );
    }

    #[test]
    fn test_interpolate_channels_independently() {
        let start = Color::new(0, 0, 0, 1);
        let end = Color::new(100, 200, 50, 1);
        assert_eq!(start.interpolate(&end, 0.25), Color::new(25, 50, 12, 1));
    }

    #[test]
    fn test_alpha_uses_integer_truncation() {
        let start = Color::new(0, 0, 0, 0);
        let end = Color::new(0, 0, 0, 1);
        assert_eq!(start.interpolate(&end, 0.99).a, 0);
        assert_eq!(start.interpolate(&end, 1.0).a, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(1, 2, 3, 4).to_string(), "rgba(1, 2, 3, 4)");
    }
}
