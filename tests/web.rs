//! Browser tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use libcolorize::{colorize_rgba, encode_png, PhotoColorizer, PixelBuffer};
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

#[wasm_bindgen_test]
fn colorize_rgba_fallback_tint() {
    let out = ok(colorize_rgba(&[200, 200, 200, 255], 1, 1, &[]));
    assert_eq!(out, vec![240, 200, 160, 255]);
}

#[wasm_bindgen_test]
fn session_png_round_trip() {
    let source = PixelBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
    let png = encode_png(&source).unwrap();

    let mut session = PhotoColorizer::new();
    ok(session.load_image(&png));

    let colors = Array::new();
    colors.push(&JsValue::from_str("#FF0000"));
    ok(session.set_colors(colors));

    let result = ok(session.colorize());
    assert_eq!(result.width(), 2);
    assert_eq!(result.color_count(), 1);
    assert_eq!(result.get_rgba().to_vec(), vec![76, 0, 0, 255, 255, 0, 0, 255]);
    assert!(ok(result.encode_png()).length() > 8);
}

#[wasm_bindgen_test]
fn session_reports_missing_image() {
    let session = PhotoColorizer::new();
    assert!(session.colorize().is_err());
}
