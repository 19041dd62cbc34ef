//! Palette colorization of a grayscale photo.
//!
//! Each pixel's luminance picks one of `N` equal brightness buckets, one
//! per palette entry, and the entry is scaled by an intensity that grows
//! with brightness. With no palette at all a fixed sepia tint is applied.

use log::{debug, warn};

use crate::error::{ColorizeError, Result};
use crate::palette::Rgb;
use crate::utils::{clamp_channel, luminance};

use super::buffer::{check_dimensions, PixelBuffer, CHANNELS};

/// Tunables of the colorizer. The defaults are the reference behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorizeConfig {
    /// R, G, B multipliers applied to luminance when the palette is empty.
    pub fallback_tint: [f64; 3],
    /// Intensity applied to the darkest pixels (0.0-1.0, default: 0.3).
    /// Intensity rises linearly to 1.0 at full brightness.
    pub min_intensity: f64,
}

impl Default for ColorizeConfig {
    fn default() -> Self {
        Self {
            fallback_tint: [1.2, 1.0, 0.8],
            min_intensity: 0.3,
        }
    }
}

/// Colorize `source` with `palette` using the default config.
///
/// Pure function: takes immutable input, returns new buffer.
pub fn colorize(source: &PixelBuffer, palette: &[Rgb]) -> Result<PixelBuffer> {
    colorize_with_config(source, palette, &ColorizeConfig::default())
}

/// Colorize `source` with `palette` and an explicit config.
pub fn colorize_with_config(
    source: &PixelBuffer,
    palette: &[Rgb],
    config: &ColorizeConfig,
) -> Result<PixelBuffer> {
    source.validate()?;

    let mut data = vec![0u8; source.data.len()];
    colorize_into(&source.data, source.width, source.height, palette, config, &mut data)?;

    Ok(PixelBuffer {
        width: source.width,
        height: source.height,
        data,
    })
}

/// Colorize raw RGBA bytes into a caller-provided buffer of the same length.
///
/// `input` and `output` are row-major RGBA, `width * height * 4` bytes each.
pub fn colorize_into(
    input: &[u8],
    width: u32,
    height: u32,
    palette: &[Rgb],
    config: &ColorizeConfig,
    output: &mut [u8],
) -> Result<()> {
    check_dimensions(width, height)?;
    let expected = PixelBuffer::byte_len(width, height)?;
    if input.len() != expected {
        return Err(ColorizeError::BufferSizeMismatch { expected, got: input.len() });
    }
    if output.len() != expected {
        return Err(ColorizeError::BufferSizeMismatch { expected, got: output.len() });
    }

    if palette.is_empty() {
        warn!("empty palette, applying fallback tint to {width}x{height} image");
    } else {
        debug!("colorizing {width}x{height} image with {} palette entries", palette.len());
    }

    for (src, dst) in input.chunks_exact(CHANNELS).zip(output.chunks_exact_mut(CHANNELS)) {
        let l = luminance(src[0], src[1], src[2]);
        let rgb = if palette.is_empty() {
            tint(l, config.fallback_tint)
        } else {
            blend(l, palette, config.min_intensity)
        };
        dst[..3].copy_from_slice(&rgb);
        // Preserve original alpha
        dst[3] = src[3];
    }

    Ok(())
}

/// Index of the brightness bucket `b` (0.0-1.0) falls into, out of `n`.
///
/// Buckets are half-open `[i/n, (i+1)/n)`; `b = 1.0` lands in the last one.
#[inline]
pub fn bucket_index(brightness: f64, n: usize) -> usize {
    debug_assert!(n > 0);
    let idx = (brightness * n as f64).floor();
    (idx.max(0.0) as usize).min(n - 1)
}

/// Color intensity for brightness `b`: `min` at black, 1.0 at white.
#[inline]
pub fn blend_intensity(brightness: f64, min_intensity: f64) -> f64 {
    brightness * (1.0 - min_intensity) + min_intensity
}

/// Palette color for luminance `l`, scaled by its intensity.
#[inline]
fn blend(l: f64, palette: &[Rgb], min_intensity: f64) -> [u8; 3] {
    let brightness = l / 255.0;
    let color = palette[bucket_index(brightness, palette.len())];
    let k = blend_intensity(brightness, min_intensity);

    [
        clamp_channel(color.r as f64 * k),
        clamp_channel(color.g as f64 * k),
        clamp_channel(color.b as f64 * k),
    ]
}

/// Fixed per-channel tint of luminance `l`.
#[inline]
fn tint(l: f64, factors: [f64; 3]) -> [u8; 3] {
    [
        clamp_channel(l * factors[0]),
        clamp_channel(l * factors[1]),
        clamp_channel(l * factors[2]),
    ]
}
