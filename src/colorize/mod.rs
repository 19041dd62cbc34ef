//! Luminance-bucket palette colorizer.

mod buffer;
mod transform;

pub use buffer::{PixelBuffer, CHANNELS};
pub use transform::*;
