//! # libcolorize
//!
//! WASM palette colorizer for grayscale photos.
//!
//! Every pixel's luminance selects one of the palette colors by
//! brightness bucket, and that color is blended in at an intensity that
//! grows with brightness. The transform is pure and deterministic; the
//! [`PhotoColorizer`] session wraps it with upload, color picking and
//! PNG download for the browser.

mod colorize;
mod error;
mod image_io;
mod logging;
mod palette;
mod renderer;
mod utils;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize the WASM module. Call this once before using other functions.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better error messages for panics in debug builds
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init_logging(log::LevelFilter::Info);
}

/// Change the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"`, `"trace"`). Returns false for an unknown name.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> bool {
    match logging::parse_level(level) {
        Some(filter) => {
            logging::init_logging(filter);
            true
        }
        None => false,
    }
}

// Re-export main types
pub use colorize::*;
pub use error::{ColorizeError, Result};
pub use image_io::*;
pub use palette::*;
pub use renderer::*;
pub use utils::luminance;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_log_natively() {
        init();
        log::info!("init done");
        // The host can still install its own logger afterwards
        let _ = env_logger::builder().is_test(true).try_init();
        assert!(set_log_level("debug"));
        log::debug!("level changed");
        assert!(!set_log_level("loud"));
    }
}
