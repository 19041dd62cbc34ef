//! Browser-facing colorizer session and one-shot helpers.
//!
//! `PhotoColorizer` follows the page flow: upload a photo, pick colors,
//! colorize, download. Precondition failures (no image, no colors) are
//! reported separately from transform failures.

use js_sys::{Array, Uint8Array};
use log::info;
use wasm_bindgen::prelude::*;

use crate::colorize::{colorize_with_config, ColorizeConfig, PixelBuffer};
use crate::error::{ColorizeError, Result};
use crate::image_io::{decode_image, encode_png, DOWNLOAD_FILE_NAME};
use crate::palette::{Palette, PaletteSelection, Rgb};
use crate::utils::Stopwatch;

/// Colorizer session holding the uploaded photo and the color selection.
#[wasm_bindgen]
pub struct PhotoColorizer {
    source: Option<PixelBuffer>,
    selection: PaletteSelection,
    config: ColorizeConfig,
}

#[wasm_bindgen]
impl PhotoColorizer {
    /// Create a session with the default color selection.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            source: None,
            selection: PaletteSelection::default(),
            config: ColorizeConfig::default(),
        }
    }

    /// Load an encoded photo (PNG, JPEG, GIF, WebP, BMP).
    #[wasm_bindgen(js_name = loadImage)]
    pub fn load_image(&mut self, data: &[u8]) -> std::result::Result<(), JsError> {
        Ok(self.try_load_image(data)?)
    }

    /// Load RGBA pixels already decoded by a canvas.
    #[wasm_bindgen(js_name = loadRgba)]
    pub fn load_rgba(&mut self, rgba: &[u8], width: u32, height: u32) -> std::result::Result<(), JsError> {
        Ok(self.try_load_rgba(rgba, width, height)?)
    }

    #[wasm_bindgen(getter, js_name = hasImage)]
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.source.as_ref().map_or(0, |s| s.width)
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.source.as_ref().map_or(0, |s| s.height)
    }

    /// Toggle a `#RRGGBB` color; returns whether it is now selected.
    #[wasm_bindgen(js_name = toggleColor)]
    pub fn toggle_color(&mut self, hex: &str) -> std::result::Result<bool, JsError> {
        Ok(self.try_toggle_color(hex)?)
    }

    /// Replace the selection with the given hex colors.
    #[wasm_bindgen(js_name = setColors)]
    pub fn set_colors(&mut self, hexes: Array) -> std::result::Result<(), JsError> {
        let hexes = hexes
            .iter()
            .map(|v| v.as_string().ok_or_else(|| JsError::new("colors must be strings")))
            .collect::<std::result::Result<Vec<String>, JsError>>()?;
        Ok(self.try_set_colors(&hexes[..])?)
    }

    #[wasm_bindgen(js_name = clearColors)]
    pub fn clear_colors(&mut self) {
        self.selection.clear();
    }

    /// Selected colors as `#RRGGBB` strings, in selection order.
    #[wasm_bindgen(js_name = selectedColors)]
    pub fn selected_colors(&self) -> Array {
        self.selection
            .colors()
            .iter()
            .map(|c| JsValue::from_str(&c.to_hex()))
            .collect()
    }

    #[wasm_bindgen(getter, js_name = colorCount)]
    pub fn color_count(&self) -> usize {
        self.selection.len()
    }

    /// Colorize the loaded photo with the selected colors.
    #[wasm_bindgen]
    pub fn colorize(&self) -> std::result::Result<ColorizeResult, JsError> {
        Ok(self.run()?)
    }

    /// Dispose of all resources.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        self.source = None;
    }
}

impl PhotoColorizer {
    pub fn try_load_image(&mut self, data: &[u8]) -> Result<()> {
        self.dispose();
        let buffer = decode_image(data)?;
        info!("loaded {}x{} image ({} bytes)", buffer.width, buffer.height, data.len());
        self.source = Some(buffer);
        Ok(())
    }

    pub fn try_load_rgba(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<()> {
        self.dispose();
        self.source = Some(PixelBuffer::new(width, height, rgba.to_vec())?);
        Ok(())
    }

    pub fn try_toggle_color(&mut self, hex: &str) -> Result<bool> {
        Ok(self.selection.toggle(Rgb::from_hex(hex)?))
    }

    pub fn try_set_colors<S: AsRef<str>>(&mut self, hexes: &[S]) -> Result<()> {
        let palette = Palette::from_hex_list(hexes)?;
        self.selection.set(palette.colors);
        Ok(())
    }

    pub fn selection(&self) -> &PaletteSelection {
        &self.selection
    }

    pub fn config_mut(&mut self) -> &mut ColorizeConfig {
        &mut self.config
    }

    /// Check preconditions and run the transform.
    pub fn run(&self) -> Result<ColorizeResult> {
        let source = self.source.as_ref().ok_or(ColorizeError::NoImage)?;
        if self.selection.is_empty() {
            return Err(ColorizeError::NoColors);
        }

        let result = timed_colorize(source, self.selection.colors(), &self.config)?;
        info!(
            "colorized {}x{} image using {} colors in {:.1} ms",
            result.width(),
            result.height(),
            result.color_count(),
            result.elapsed_ms()
        );
        Ok(result)
    }
}

impl Default for PhotoColorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of one colorize call.
#[wasm_bindgen]
pub struct ColorizeResult {
    buffer: PixelBuffer,
    color_count: usize,
    elapsed_ms: f64,
}

#[wasm_bindgen]
impl ColorizeResult {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    /// Number of palette entries used (0 means fallback tint).
    #[wasm_bindgen(getter, js_name = colorCount)]
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Wall time spent in the transform.
    #[wasm_bindgen(getter, js_name = elapsedMs)]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// RGBA pixels, ready for `ImageData`.
    #[wasm_bindgen(js_name = getRgba)]
    pub fn get_rgba(&self) -> Uint8Array {
        Uint8Array::from(&self.buffer.data[..])
    }

    /// PNG bytes for download.
    #[wasm_bindgen(js_name = encodePng)]
    pub fn encode_png(&self) -> std::result::Result<Uint8Array, JsError> {
        let png = self.to_png()?;
        Ok(Uint8Array::from(&png[..]))
    }

    #[wasm_bindgen(getter, js_name = fileName)]
    pub fn file_name(&self) -> String {
        DOWNLOAD_FILE_NAME.to_owned()
    }
}

impl ColorizeResult {
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn rgba(&self) -> &[u8] {
        &self.buffer.data
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.buffer)
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

fn timed_colorize(source: &PixelBuffer, palette: &[Rgb], config: &ColorizeConfig) -> Result<ColorizeResult> {
    let watch = Stopwatch::start();
    let buffer = colorize_with_config(source, palette, config)?;
    Ok(ColorizeResult {
        buffer,
        color_count: palette.len(),
        elapsed_ms: watch.elapsed_ms(),
    })
}

/// Colorize raw RGBA pixels with a packed palette (see [`Palette::from_packed`]).
/// An empty palette applies the fallback tint.
#[wasm_bindgen(js_name = colorizeRgba)]
pub fn colorize_rgba(rgba: &[u8], width: u32, height: u32, palette: &[u8]) -> std::result::Result<Vec<u8>, JsError> {
    Ok(try_colorize_rgba(rgba, width, height, palette)?)
}

/// Decode a photo, colorize it with a packed palette and return PNG bytes.
#[wasm_bindgen(js_name = colorizeImage)]
pub fn colorize_image(data: &[u8], palette: &[u8]) -> std::result::Result<Vec<u8>, JsError> {
    Ok(try_colorize_image(data, palette)?)
}

pub fn try_colorize_rgba(rgba: &[u8], width: u32, height: u32, palette: &[u8]) -> Result<Vec<u8>> {
    let palette = Palette::from_packed(palette)?;
    let source = PixelBuffer::new(width, height, rgba.to_vec())?;
    let result = timed_colorize(&source, palette.as_slice(), &ColorizeConfig::default())?;
    Ok(result.into_buffer().into_raw())
}

pub fn try_colorize_image(data: &[u8], palette: &[u8]) -> Result<Vec<u8>> {
    let palette = Palette::from_packed(palette)?;
    let source = decode_image(data)?;
    let result = timed_colorize(&source, palette.as_slice(), &ColorizeConfig::default())?;
    result.to_png()
}
