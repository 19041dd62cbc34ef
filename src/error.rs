//! Error type shared by the colorizer, the palette codec and the session.

use thiserror::Error;

/// Everything that can go wrong between an uploaded photo and its
/// colorized rendition.
#[derive(Debug, Error)]
pub enum ColorizeError {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// RGBA buffer length doesn't match width * height * 4
    #[error("rgba buffer: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// The image could not be decoded into pixels.
    #[error("unable to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The output could not be encoded as PNG.
    #[error("PNG encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    #[error("invalid packed palette: {0}")]
    InvalidPalette(String),

    /// Colorize was requested before any image was loaded.
    #[error("no image selected")]
    NoImage,

    /// Colorize was requested with an empty color selection.
    #[error("no colors selected")]
    NoColors,
}

pub type Result<T> = std::result::Result<T, ColorizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ColorizeError::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(err.to_string(), "invalid dimensions: 0x4");

        let err = ColorizeError::BufferSizeMismatch { expected: 16, got: 12 };
        assert_eq!(err.to_string(), "rgba buffer: expected 16 bytes, got 12");

        assert_eq!(ColorizeError::NoImage.to_string(), "no image selected");
        assert_eq!(ColorizeError::NoColors.to_string(), "no colors selected");
    }
}
