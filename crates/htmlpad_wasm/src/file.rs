//! File output collaborator.
//!
//! Saving constructs a `text/html` blob named by the document label and
//! triggers a client-side download through a temporary anchor element.
//! There is no server round-trip; the opened-file path never passes
//! through here (the host reads the file JS-side and re-enters the
//! editor with an `Open` command).

use htmlpad_core::bridge::SaveSink;
use htmlpad_core::error::{EditorError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// Save sink that downloads the document through the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct DownloadSink;

impl DownloadSink {
    /// Create a download sink.
    pub fn new() -> Self {
        Self
    }
}

fn handoff_error(label: &str, message: impl Into<String>) -> EditorError {
    EditorError::SaveHandoff {
        label: label.to_string(),
        message: message.into(),
    }
}

fn js_handoff_error(label: &str, err: JsValue) -> EditorError {
    handoff_error(label, format!("{err:?}"))
}

fn host_document(label: &str) -> Result<Document> {
    web_sys::window()
        .ok_or_else(|| handoff_error(label, "no window available"))?
        .document()
        .ok_or_else(|| handoff_error(label, "no document available"))
}

impl SaveSink for DownloadSink {
    fn save(&mut self, content: &str, label: &str) -> Result<()> {
        let document = host_document(label)?;

        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type("text/html");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| js_handoff_error(label, e))?;
        let url =
            Url::create_object_url_with_blob(&blob).map_err(|e| js_handoff_error(label, e))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| js_handoff_error(label, e))?
            .dyn_into()
            .map_err(|_| handoff_error(label, "anchor element has unexpected type"))?;
        anchor.set_href(&url);
        anchor.set_download(label);

        let body = document
            .body()
            .ok_or_else(|| handoff_error(label, "document has no body"))?;
        body.append_child(&anchor)
            .map_err(|e| js_handoff_error(label, e))?;
        anchor.click();
        let _ = body.remove_child(&anchor);
        let _ = Url::revoke_object_url(&url);

        Ok(())
    }
}
