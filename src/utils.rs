//! Utility functions for binary reading, luminance and timing.

use std::io::Cursor;
use byteorder::{BigEndian, ReadBytesExt};

/// Broadcast-style luma weights for R, G and B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Binary reader wrapper for big-endian data (used by the packed palette).
pub struct BigEndianReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> BigEndianReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len() - self.position()
    }

    #[inline]
    pub fn read_u32(&mut self) -> Option<u32> {
        self.cursor.read_u32::<BigEndian>().ok()
    }
}

/// Weighted luminance of an RGB triple, in [0, 255].
///
/// Computed in `f64` so results match what a browser canvas pipeline
/// produces for the same formula.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * LUMA_WEIGHTS[0] + g as f64 * LUMA_WEIGHTS[1] + b as f64 * LUMA_WEIGHTS[2]
}

/// Clamp a channel value to [0, 255] and truncate it to a byte.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Times a transform. Monotonic natively; in the browser it reads
/// `Date.now()`, so the reading is floored at zero.
pub struct Stopwatch {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Stopwatch {
    #[cfg(target_arch = "wasm32")]
    pub fn start() -> Self {
        Self {
            start_ms: js_sys::Date::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn elapsed_ms(&self) -> f64 {
        (js_sys::Date::now() - self.start_ms).max(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_big_endian() {
        let data = [0x00, 0xFF, 0x80, 0x01, 0x12];
        let mut reader = BigEndianReader::new(&data);
        assert_eq!(reader.read_u32(), Some(0x00FF8001));
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_u32(), None);
    }

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert_eq!(luminance(255, 255, 255), 255.0);
        assert_eq!(luminance(200, 200, 200), 200.0);
        // Pure green carries most of the weight
        assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
        assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-3.0), 0);
        assert_eq!(clamp_channel(76.5), 76);
        assert_eq!(clamp_channel(254.999), 254);
        assert_eq!(clamp_channel(306.0), 255);
    }

    #[test]
    fn test_stopwatch_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = watch.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first + 1.0, "{first} -> {second}");
    }
}
