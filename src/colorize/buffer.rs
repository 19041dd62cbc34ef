//! RGBA pixel buffer handed between the decoder, the colorizer and the
//! encoder.

use crate::error::{ColorizeError, Result};

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Row-major RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, `[R, G, B, A]` per pixel
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, checking dimensions and length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let buffer = Self { width, height, data };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Expected length of `data` for the given dimensions. Fails with
    /// `InvalidDimensions` when the length does not fit in `usize`.
    #[inline]
    pub fn byte_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(ColorizeError::InvalidDimensions { width, height })
    }

    /// Check that the buffer is non-empty and its length matches its
    /// dimensions.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        let expected = Self::byte_len(self.width, self.height)?;
        if self.data.len() != expected {
            return Err(ColorizeError::BufferSizeMismatch {
                expected,
                got: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// RGBA value at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.data.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[inline]
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ColorizeError::InvalidDimensions { width, height });
    }
    Ok(())
}
