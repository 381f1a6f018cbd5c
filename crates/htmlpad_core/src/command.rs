//! Command pattern API for driving the editor.
//!
//! External trigger events (text-change notifications, toolbar actions,
//! keyboard chords, file-open completions) reach the lifecycle controller
//! as serializable commands, so every runtime embedding the core drives
//! it through the same interface (WASM today, headless tests).
//!
//! # Usage
//!
//! ```ignore
//! use htmlpad_core::command::Command;
//!
//! let cmd = Command::Edit { content: "<h1>hi</h1>".to_string() };
//! let snapshot = editor.execute(cmd)?;
//! assert!(snapshot.dirty);
//! ```

use serde::{Deserialize, Serialize};

/// All commands that can be executed against an editor instance.
///
/// Commands are serializable for cross-runtime usage (WASM, IPC, etc.).
/// Every command resolves to the refreshed post-transition snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Command {
    /// Apply an edited revision of the document text.
    ///
    /// Ignored entirely when the content is identical to the current
    /// text.
    Edit {
        /// The full document text after the edit.
        content: String,
    },

    /// Step back one entry in the history timeline.
    ///
    /// Safe to issue at the start boundary; the call is a no-op there.
    Undo,

    /// Step forward one entry in the history timeline.
    ///
    /// Safe to issue at the end boundary; the call is a no-op there.
    Redo,

    /// Replace the document with freshly opened file content.
    Open {
        /// The file's text.
        content: String,
        /// The file's name, which becomes the document label.
        file_name: String,
    },

    /// Hand the document to the save collaborator.
    ///
    /// The dirty flag clears only after the hand-off completes without
    /// error.
    Save,

    /// Reformat the document through the host's markup reinterpreter.
    ///
    /// Best-effort: on failure the document is left completely unchanged.
    Format,

    /// Read the current snapshot without mutating anything.
    Snapshot,
}
