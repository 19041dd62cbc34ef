//! RGB color triple and its hex notation.

use std::fmt;

use crate::error::{ColorizeError, Result};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorizeError::InvalidColor(s.to_owned()));
        }
        let rgb = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorizeError::InvalidColor(s.to_owned()))?;
        Ok(Self::from_u32(rgb))
    }

    /// Render as `#RRGGBB` (upper case).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Build from `0xRRGGBB`; the high byte is ignored.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#FF0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hex("8b4513").unwrap(), Rgb::new(0x8B, 0x45, 0x13));
        assert_eq!(Rgb::from_hex(" #00ffFF ").unwrap(), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["", "#FFF", "#FF00000", "#GG0000", "+FF000", "#-F0000"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ColorizeError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_display() {
        let gold = Rgb::new(0xFF, 0xD7, 0x00);
        assert_eq!(gold.to_hex(), "#FFD700");
        assert_eq!(gold.to_string(), "#FFD700");
    }

    #[test]
    fn test_u32_packing() {
        assert_eq!(Rgb::from_u32(0x00800080), Rgb::new(0x80, 0x00, 0x80));
        assert_eq!(Rgb::from_u32(0xFF123456), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(Rgb::new(0xFF, 0xA5, 0x00).to_u32(), 0x00FFA500);
    }
}
