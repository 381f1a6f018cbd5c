//! Live preview collaborator.
//!
//! Renders the complete document into an attached iframe's content
//! document. Every delivery is a full replace-and-reload; the surface is
//! sandboxed by the host markup (`allow-same-origin allow-scripts`), so
//! embedded scripts run inside the frame only.

use htmlpad_core::bridge::PreviewSink;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlIFrameElement};

/// Preview sink backed by an `<iframe>` element.
///
/// Starts detached; deliveries before a surface is attached are dropped,
/// and the host re-renders on attachment.
pub struct IframePreview {
    frame: Option<HtmlIFrameElement>,
}

impl IframePreview {
    /// Create a preview sink with no surface attached yet.
    pub fn detached() -> Self {
        Self { frame: None }
    }

    /// Attach the rendering surface.
    pub fn attach(&mut self, frame: HtmlIFrameElement) {
        self.frame = Some(frame);
    }

    /// Whether a rendering surface is attached.
    pub fn is_attached(&self) -> bool {
        self.frame.is_some()
    }
}

impl PreviewSink for IframePreview {
    fn render(&mut self, content: &str) {
        let Some(frame) = &self.frame else {
            log::debug!("preview delivery dropped, no surface attached");
            return;
        };
        let Some(doc) = frame.content_document() else {
            log::warn!("preview iframe has no accessible content document");
            return;
        };
        // The open/write/close cycle replaces the frame document wholesale.
        let doc: HtmlDocument = doc.unchecked_into();
        if doc.open().is_err() {
            log::warn!("preview document failed to open");
            return;
        }
        if let Err(err) = doc.write_1(content) {
            log::warn!("preview write failed: {err:?}");
        }
        let _ = doc.close();
    }
}
