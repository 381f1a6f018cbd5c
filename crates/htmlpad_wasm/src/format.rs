//! Markup reinterpretation collaborator.
//!
//! Reformatting round-trips the source through a detached HTML document:
//! the browser's own parser normalizes the markup and the result is read
//! back from `outerHTML` under a fresh doctype. Best-effort only; the
//! controller leaves the document untouched when this fails.

use htmlpad_core::bridge::Formatter;
use htmlpad_core::error::{EditorError, Result};
use wasm_bindgen::JsValue;

/// Formatter backed by `document.implementation.createHTMLDocument()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomFormatter;

impl DomFormatter {
    /// Create a DOM-backed formatter.
    pub fn new() -> Self {
        Self
    }
}

fn reformat_error(message: impl Into<String>) -> EditorError {
    EditorError::Reformat {
        message: message.into(),
    }
}

fn js_reformat_error(err: JsValue) -> EditorError {
    reformat_error(format!("{err:?}"))
}

impl Formatter for DomFormatter {
    fn reformat(&self, content: &str) -> Result<String> {
        let window = web_sys::window().ok_or_else(|| reformat_error("no window available"))?;
        let document = window
            .document()
            .ok_or_else(|| reformat_error("no document available"))?;

        let scratch = document
            .implementation()
            .map_err(js_reformat_error)?
            .create_html_document()
            .map_err(js_reformat_error)?;
        let root = scratch
            .document_element()
            .ok_or_else(|| reformat_error("scratch document has no root element"))?;

        root.set_inner_html(content);
        Ok(format!("<!DOCTYPE html>\n{}", root.outer_html()))
    }
}
