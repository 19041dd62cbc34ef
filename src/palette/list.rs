//! Ordered color palette and its packed byte form.
//!
//! The packed form is what JavaScript hands over as a `Uint8Array`: one
//! big-endian `u32` per entry holding `0x00RRGGBB`, i.e. the same number
//! a CSS hex literal reads as.

use crate::error::{ColorizeError, Result};
use crate::utils::BigEndianReader;

use super::Rgb;

/// Bytes per packed palette entry.
pub const PACKED_ENTRY_SIZE: usize = 4;

/// Ordered list of target colors. Order picks the luminance bucket each
/// color covers; duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    pub colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    /// Parse a list of hex strings, keeping their order.
    pub fn from_hex_list<I, S>(hexes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = hexes
            .into_iter()
            .map(|s| Rgb::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    /// Parse a packed palette. An empty slice yields an empty palette.
    pub fn from_packed(data: &[u8]) -> Result<Self> {
        if data.len() % PACKED_ENTRY_SIZE != 0 {
            return Err(ColorizeError::InvalidPalette(format!(
                "length {} is not a multiple of {}",
                data.len(),
                PACKED_ENTRY_SIZE
            )));
        }

        let mut reader = BigEndianReader::new(data);
        let mut colors = Vec::with_capacity(data.len() / PACKED_ENTRY_SIZE);

        while reader.remaining() >= PACKED_ENTRY_SIZE {
            let offset = reader.position();
            let value = reader.read_u32().ok_or_else(|| {
                ColorizeError::InvalidPalette(format!("truncated entry at byte {offset}"))
            })?;
            if value > 0x00FF_FFFF {
                return Err(ColorizeError::InvalidPalette(format!(
                    "entry at byte {offset} has non-zero high byte: {value:#010X}"
                )));
            }
            colors.push(Rgb::from_u32(value));
        }

        Ok(Self { colors })
    }

    /// Inverse of [`Palette::from_packed`].
    pub fn to_packed(&self) -> Vec<u8> {
        self.colors
            .iter()
            .flat_map(|c| c.to_u32().to_be_bytes())
            .collect()
    }

    pub fn to_hex_list(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<T: IntoIterator<Item = Rgb>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
