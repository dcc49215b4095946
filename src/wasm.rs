//! WASM bindings for browser-based conversion.
//!
//! This module exposes the converter to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert an HTML string to Markdown.
#[wasm_bindgen(js_name = htmlToMarkdown)]
pub fn html_to_markdown(html: &str) -> Result<String, JsValue> {
    crate::convert_str(html).map_err(|e| JsValue::from_str(&e.to_string()))
}
