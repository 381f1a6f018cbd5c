//! Document history store.
//!
//! The single source of truth for the editor's text content and its
//! undo/redo timeline. Transitions keep `content` and `position` in
//! lock-step: `timeline[position]` always equals `content`, the timeline
//! is never empty, and a fresh edit invalidates everything after the
//! current position (branch-on-edit, not a tree).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::template::{STARTER_DOCUMENT, UNTITLED_LABEL};

/// The authoritative document: current text, edit timeline, and the
/// dirty flag of the save lifecycle.
///
/// Created once at editor startup over the built-in starter page,
/// replaced wholesale on file open, and mutated in place on
/// edit/undo/redo. Lives for the whole editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
    timeline: Vec<String>,
    position: usize,
    label: String,
    dirty: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(STARTER_DOCUMENT)
    }
}

impl Document {
    /// Create a document holding `initial` as its only timeline entry,
    /// clean and labeled with the untitled placeholder.
    pub fn new(initial: impl Into<String>) -> Self {
        let content = initial.into();
        Self {
            timeline: vec![content.clone()],
            content,
            position: 0,
            label: UNTITLED_LABEL.to_string(),
            dirty: false,
        }
    }

    /// Record an edited revision of the document text.
    ///
    /// Content identical to the current text is ignored entirely, so
    /// redundant change notifications from the input surface never create
    /// spurious history entries. A real edit discards every timeline entry
    /// after the current position, appends the new content, and marks the
    /// document dirty.
    ///
    /// Returns whether the document changed.
    pub fn apply_edit(&mut self, new_content: &str) -> bool {
        if new_content == self.content {
            return false;
        }
        let new_content = new_content.to_string();
        self.timeline.truncate(self.position + 1);
        self.timeline.push(new_content.clone());
        self.position = self.timeline.len() - 1;
        self.content = new_content;
        self.dirty = true;
        true
    }

    /// Step back one entry in the timeline. No-op at the start.
    ///
    /// Movement marks the document dirty even when the restored content
    /// matches the last save; there is no content-equality suppression.
    ///
    /// Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.content = self.timeline[self.position].clone();
        self.dirty = true;
        true
    }

    /// Step forward one entry in the timeline. No-op at the end.
    ///
    /// Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.position + 1 == self.timeline.len() {
            return false;
        }
        self.position += 1;
        self.content = self.timeline[self.position].clone();
        self.dirty = true;
        true
    }

    /// Replace the document wholesale with freshly opened file content.
    ///
    /// The timeline resets to a single entry; history from before the open
    /// is not reachable from the new document.
    pub fn load(&mut self, content: impl Into<String>, label: impl Into<String>) {
        let content = content.into();
        self.timeline = vec![content.clone()];
        self.content = content;
        self.position = 0;
        self.label = label.into();
        self.dirty = false;
    }

    /// Record a completed save hand-off. Clears the dirty flag and touches
    /// nothing else.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Current full text of the document.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Logical filename associated with the content.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when the content has diverged from the last save hand-off.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.timeline.len()
    }

    /// Index of the active entry within the timeline.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of entries reachable by undo/redo.
    pub fn timeline_len(&self) -> usize {
        self.timeline.len()
    }

    /// Produce the immutable read-model handed to collaborators.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content.clone(),
            label: self.label.clone(),
            dirty: self.dirty,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}

/// Immutable read-model of the document for collaborators and display.
///
/// `can_undo`/`can_redo` drive toolbar enablement in the frontend; the
/// rest mirrors the document fields that matter outside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// Current full text of the document.
    pub content: String,
    /// Logical filename associated with the content.
    pub label: String,
    /// True when the content has unsaved changes.
    pub dirty: bool,
    /// Whether an undo step is available.
    pub can_undo: bool,
    /// Whether a redo step is available.
    pub can_redo: bool,
}

impl Snapshot {
    /// Window-title string: the label, with a `*` marker while dirty.
    pub fn window_title(&self) -> String {
        if self.dirty {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}
