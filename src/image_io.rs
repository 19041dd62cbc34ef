//! Decode uploaded photos into pixel buffers and encode results as PNG.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::colorize::PixelBuffer;
use crate::error::{ColorizeError, Result};

/// Suggested file name for a downloaded result.
pub const DOWNLOAD_FILE_NAME: &str = "colorized-photo.png";

/// Decode an encoded image (PNG, JPEG, GIF, WebP, BMP) into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes).map_err(ColorizeError::Decode)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}

/// Encode a pixel buffer as PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    buffer.validate()?;

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&buffer.data, buffer.width, buffer.height, ExtendedColorType::Rgba8)
        .map_err(ColorizeError::Encode)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> PixelBuffer {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 200]);
            }
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_png_round_trip() {
        let buffer = checker(5, 3);
        let png = encode_png(&buffer).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ColorizeError::Decode(_)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let png = encode_png(&checker(4, 4)).unwrap();
        let err = decode_image(&png[..png.len() / 2]).unwrap_err();
        assert!(matches!(err, ColorizeError::Decode(_)));
    }

    #[test]
    fn test_encode_rejects_invalid_buffer() {
        let buffer = PixelBuffer { width: 2, height: 2, data: vec![0; 4] };
        let err = encode_png(&buffer).unwrap_err();
        assert!(matches!(err, ColorizeError::BufferSizeMismatch { .. }));
    }
}
