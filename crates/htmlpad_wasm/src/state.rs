//! Global editor state management.

use std::cell::RefCell;

use htmlpad_core::editor::Editor;

use crate::file::DownloadSink;
use crate::format::DomFormatter;
use crate::preview::IframePreview;

/// The concrete editor type hosted in the browser.
pub type WasmEditor = Editor<IframePreview, DownloadSink, DomFormatter>;

thread_local! {
    static EDITOR: RefCell<WasmEditor> = RefCell::new(Editor::new(
        IframePreview::detached(),
        DownloadSink::new(),
        DomFormatter::new(),
    ));
}

/// Execute a closure with read access to the global editor.
pub fn with_editor<F, R>(f: F) -> R
where
    F: FnOnce(&WasmEditor) -> R,
{
    EDITOR.with(|ed| f(&ed.borrow()))
}

/// Execute a closure with mutable access to the global editor.
///
/// Wasm is single-threaded, so the thread-local `RefCell` is the single
/// owned handle to the document; no mutation ever runs concurrently with
/// another.
pub fn with_editor_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut WasmEditor) -> R,
{
    EDITOR.with(|ed| f(&mut ed.borrow_mut()))
}
