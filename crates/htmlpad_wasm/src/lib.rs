//! WebAssembly bindings for the htmlpad editor core.
//!
//! This crate hosts the editor in the browser: a single editor instance
//! lives behind a thread-local handle, the preview renders into an
//! attached iframe, saves download through a `text/html` blob, and
//! reformatting goes through the browser's own HTML parser. File opens
//! complete JS-side and re-enter here as `open_file` calls carrying the
//! text.

use htmlpad_core::command::Command;
use htmlpad_core::document::Snapshot;
use htmlpad_core::error::EditorError;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlIFrameElement, KeyboardEvent};

mod file;
mod format;
mod keys;
mod preview;
mod state;

pub use file::DownloadSink;
pub use format::DomFormatter;
pub use keys::command_for_chord;
pub use preview::IframePreview;
pub use state::{WasmEditor, with_editor, with_editor_mut};

// ============================================================================
// Initialization
// ============================================================================

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the WASM module. Called automatically on module load.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();
    let _ = console_log::init_with_level(log::Level::Debug);
}

// ============================================================================
// Marshalling Helpers
// ============================================================================

fn to_js_snapshot(snapshot: Snapshot) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&snapshot).map_err(Into::into)
}

fn err_to_js(err: EditorError) -> JsValue {
    serde_wasm_bindgen::to_value(&err.to_serializable())
        .unwrap_or_else(|_| JsValue::from_str(&err.to_string()))
}

// ============================================================================
// Editor Commands
// ============================================================================

/// Execute a serialized command against the editor.
///
/// Unified entry point mirroring the individual functions below; the
/// command crosses the boundary as a `{ type, params }` object. Returns
/// the refreshed snapshot.
#[wasm_bindgen]
pub fn execute(command: JsValue) -> Result<JsValue, JsValue> {
    let command: Command = serde_wasm_bindgen::from_value(command)?;
    let snapshot = with_editor_mut(|ed| ed.execute(command)).map_err(err_to_js)?;
    to_js_snapshot(snapshot)
}

/// Apply an edited revision of the document text.
#[wasm_bindgen]
pub fn edit(content: &str) -> Result<JsValue, JsValue> {
    let snapshot = with_editor_mut(|ed| ed.edit(content));
    to_js_snapshot(snapshot)
}

/// Step back one entry in the history timeline.
#[wasm_bindgen]
pub fn undo() -> Result<JsValue, JsValue> {
    let snapshot = with_editor_mut(|ed| ed.undo());
    to_js_snapshot(snapshot)
}

/// Step forward one entry in the history timeline.
#[wasm_bindgen]
pub fn redo() -> Result<JsValue, JsValue> {
    let snapshot = with_editor_mut(|ed| ed.redo());
    to_js_snapshot(snapshot)
}

/// Replace the document with freshly opened file content.
#[wasm_bindgen]
pub fn open_file(content: &str, file_name: &str) -> Result<JsValue, JsValue> {
    let snapshot = with_editor_mut(|ed| ed.open(content.to_string(), file_name.to_string()));
    to_js_snapshot(snapshot)
}

/// Hand the document to the download collaborator and clear the dirty
/// flag once the hand-off completes.
#[wasm_bindgen]
pub fn save() -> Result<JsValue, JsValue> {
    let snapshot = with_editor_mut(|ed| ed.save()).map_err(err_to_js)?;
    to_js_snapshot(snapshot)
}

/// Reformat the document through the browser's HTML parser.
///
/// On failure the document is left untouched and the error is returned.
#[wasm_bindgen]
pub fn format_document() -> Result<JsValue, JsValue> {
    let snapshot = with_editor_mut(|ed| ed.format()).map_err(err_to_js)?;
    to_js_snapshot(snapshot)
}

/// Read the current snapshot without mutating anything.
#[wasm_bindgen]
pub fn snapshot() -> Result<JsValue, JsValue> {
    let snapshot = with_editor(|ed| ed.snapshot());
    to_js_snapshot(snapshot)
}

/// Window-title string for the current state (`label *` while dirty).
#[wasm_bindgen]
pub fn window_title() -> String {
    with_editor(|ed| ed.snapshot().window_title())
}

// ============================================================================
// Collaborator Wiring
// ============================================================================

/// Attach the preview iframe and render the current document into it.
///
/// Returns the refreshed snapshot.
#[wasm_bindgen]
pub fn attach_preview(frame: HtmlIFrameElement) -> Result<JsValue, JsValue> {
    with_editor_mut(|ed| {
        ed.preview_mut().attach(frame);
        ed.refresh_preview();
    });
    snapshot()
}

/// Whether a file name carries one of the advertised markup extensions.
///
/// Advisory filter for the open dialog; opened content is never
/// validated.
#[wasm_bindgen]
pub fn accepts_file(file_name: &str) -> bool {
    htmlpad_core::template::has_accepted_extension(file_name)
}

// ============================================================================
// Keyboard Surface
// ============================================================================

/// Key-dispatch result returned to JavaScript.
#[derive(Debug, Serialize)]
pub struct JsKeyDispatch {
    /// Whether the chord was owned and executed by the editor.
    pub handled: bool,
    /// Refreshed snapshot when the chord was handled.
    pub snapshot: Option<Snapshot>,
}

/// Handle a keydown event.
///
/// Chords the editor owns are executed with the browser default
/// suppressed; everything else is left to the browser.
#[wasm_bindgen]
pub fn handle_key(event: &KeyboardEvent) -> Result<JsValue, JsValue> {
    let primary = event.ctrl_key() || event.meta_key();
    let dispatch = match keys::command_for_chord(primary, event.shift_key(), &event.key()) {
        Some(command) => {
            event.prevent_default();
            let snapshot = with_editor_mut(|ed| ed.execute(command)).map_err(err_to_js)?;
            JsKeyDispatch {
                handled: true,
                snapshot: Some(snapshot),
            }
        }
        None => JsKeyDispatch {
            handled: false,
            snapshot: None,
        },
    };
    serde_wasm_bindgen::to_value(&dispatch).map_err(Into::into)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn snapshot_of(value: JsValue) -> Snapshot {
        serde_wasm_bindgen::from_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn open_edit_undo_round_trip() {
        open_file("<p>a</p>", "a.html").unwrap();

        let snap = snapshot_of(edit("<p>b</p>").unwrap());
        assert!(snap.dirty);
        assert!(snap.can_undo);
        assert_eq!(snap.label, "a.html");

        let snap = snapshot_of(undo().unwrap());
        assert_eq!(snap.content, "<p>a</p>");
        assert!(snap.can_redo);
    }

    #[wasm_bindgen_test]
    fn execute_accepts_frontend_command_objects() {
        open_file("<p>a</p>", "a.html").unwrap();
        let cmd = serde_wasm_bindgen::to_value(&Command::Edit {
            content: "<p>c</p>".to_string(),
        })
        .unwrap();
        let snap = snapshot_of(execute(cmd).unwrap());
        assert_eq!(snap.content, "<p>c</p>");
    }

    #[wasm_bindgen_test]
    fn advisory_extension_filter() {
        assert!(accepts_file("index.html"));
        assert!(accepts_file("INDEX.HTM"));
        assert!(!accepts_file("notes.md"));
    }
}
