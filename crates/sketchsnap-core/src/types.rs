//! Value types shared by snapshots and documents.

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A gray level, as UI toolkits express it with a single white component.
    pub const fn white(level: f32, alpha: f32) -> Self {
        Self::rgba(level, level, level, alpha)
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let base = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
                Some(base.with_alpha(channel(6)? as f32 / 255.0))
            }
            _ => None,
        }
    }

    /// Return a copy with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Convert to an 8-bit RGBA tuple, rounding to the nearest step.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::from_hex("#3B82F6").unwrap();
        assert_eq!(color.to_rgba8(), (0x3B, 0x82, 0xF6, 0xFF));
        assert_eq!(color.to_hex(), "#3B82F6FF");
    }

    #[test]
    fn test_hex_with_alpha() {
        let color = Color::from_hex("00000080").unwrap();
        assert_eq!(color.to_rgba8().3, 0x80);
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("ééé").is_none());
    }

    #[test]
    fn test_white_level() {
        let gray = Color::white(245.0 / 255.0, 1.0);
        assert_eq!(gray.to_rgba8(), (245, 245, 245, 255));
    }
}
