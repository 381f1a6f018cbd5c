//! Lifecycle controller.
//!
//! Binds external trigger events to document history store transitions
//! and fans the resulting state out to collaborators: the preview sink
//! receives the full content after every content-changing transition,
//! and the save sink gates the dirty-flag clear.

use log::{debug, warn};

use crate::bridge::{Formatter, PreviewSink, SaveSink};
use crate::command::Command;
use crate::document::{Document, Snapshot};
use crate::error::Result;

/// The editor instance: a document exclusively owned by the controller,
/// plus the injected collaborators it fans out to.
///
/// All operations run on the host's single logical thread in response to
/// discrete events; the store needs no internal locking, and
/// collaborators only ever see immutable snapshots.
pub struct Editor<P, S, F> {
    document: Document,
    preview: P,
    save_sink: S,
    formatter: F,
}

impl<P, S, F> Editor<P, S, F>
where
    P: PreviewSink,
    S: SaveSink,
    F: Formatter,
{
    /// Create an editor over the built-in starter document and render it
    /// into the preview.
    pub fn new(preview: P, save_sink: S, formatter: F) -> Self {
        Self::with_document(Document::default(), preview, save_sink, formatter)
    }

    /// Create an editor over an existing document.
    pub fn with_document(document: Document, mut preview: P, save_sink: S, formatter: F) -> Self {
        preview.render(document.content());
        Self {
            document,
            preview,
            save_sink,
            formatter,
        }
    }

    /// Execute a command and return the refreshed snapshot.
    ///
    /// Boundary undo/redo calls and identical-content edits are silent
    /// no-ops, not errors. Only `Save` and `Format` can fail, and a
    /// failed `Format` leaves the document completely unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Snapshot> {
        match command {
            Command::Edit { content } => Ok(self.edit(&content)),
            Command::Undo => Ok(self.undo()),
            Command::Redo => Ok(self.redo()),
            Command::Open { content, file_name } => Ok(self.open(content, file_name)),
            Command::Save => self.save(),
            Command::Format => self.format(),
            Command::Snapshot => Ok(self.snapshot()),
        }
    }

    /// Apply an edited revision from the input surface.
    ///
    /// Content identical to the current text is ignored entirely; nothing
    /// is recorded and nothing is pushed to the preview.
    pub fn edit(&mut self, content: &str) -> Snapshot {
        if self.document.apply_edit(content) {
            debug!(
                "edit applied, timeline length {}",
                self.document.timeline_len()
            );
            self.push_preview();
        }
        self.snapshot()
    }

    /// Step back in history. Safe to call at the start boundary.
    pub fn undo(&mut self) -> Snapshot {
        if self.document.undo() {
            self.push_preview();
        }
        self.snapshot()
    }

    /// Step forward in history. Safe to call at the end boundary.
    pub fn redo(&mut self) -> Snapshot {
        if self.document.redo() {
            self.push_preview();
        }
        self.snapshot()
    }

    /// Replace the document with opened file content.
    pub fn open(&mut self, content: String, file_name: String) -> Snapshot {
        debug!("opening '{}' ({} bytes)", file_name, content.len());
        self.document.load(content, file_name);
        self.push_preview();
        self.snapshot()
    }

    /// Hand the document to the save collaborator.
    ///
    /// The dirty flag clears only after the hand-off completes without
    /// error; a sink failure propagates with the flag still set.
    pub fn save(&mut self) -> Result<Snapshot> {
        self.save_sink
            .save(self.document.content(), self.document.label())?;
        self.document.mark_saved();
        debug!("saved '{}'", self.document.label());
        Ok(self.snapshot())
    }

    /// Reformat the document through the injected formatter.
    ///
    /// On success the result is applied as an ordinary edit (a formatter
    /// returning identical text is a complete no-op). A failure is logged
    /// and propagated with the document left untouched; reformatting
    /// never corrupts the timeline.
    pub fn format(&mut self) -> Result<Snapshot> {
        match self.formatter.reformat(self.document.content()) {
            Ok(formatted) => {
                if self.document.apply_edit(&formatted) {
                    self.push_preview();
                }
                Ok(self.snapshot())
            }
            Err(err) => {
                warn!("reformat failed, document left unchanged: {err}");
                Err(err)
            }
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.document.snapshot()
    }

    /// The document owned by this editor.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The preview collaborator, for host-side surface attachment.
    pub fn preview_mut(&mut self) -> &mut P {
        &mut self.preview
    }

    /// The save collaborator.
    pub fn save_sink(&self) -> &S {
        &self.save_sink
    }

    /// Re-deliver the current content to the preview collaborator.
    ///
    /// Hosts call this after (re)attaching a rendering surface.
    pub fn refresh_preview(&mut self) {
        self.push_preview();
    }

    fn push_preview(&mut self) {
        self.preview.render(self.document.content());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BufferPreview, IdentityFormatter, MemorySaveSink};
    use crate::error::EditorError;
    use crate::template::STARTER_DOCUMENT;

    struct FailingSaveSink;

    impl SaveSink for FailingSaveSink {
        fn save(&mut self, _content: &str, label: &str) -> Result<()> {
            Err(EditorError::SaveHandoff {
                label: label.to_string(),
                message: "hand-off refused".to_string(),
            })
        }
    }

    struct FailingFormatter;

    impl Formatter for FailingFormatter {
        fn reformat(&self, _content: &str) -> Result<String> {
            Err(EditorError::Reformat {
                message: "parser exploded".to_string(),
            })
        }
    }

    /// Formatter stub that trims every line, so output differs from input.
    struct TrimFormatter;

    impl Formatter for TrimFormatter {
        fn reformat(&self, content: &str) -> Result<String> {
            Ok(content
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    fn editor() -> Editor<BufferPreview, MemorySaveSink, IdentityFormatter> {
        Editor::new(BufferPreview::new(), MemorySaveSink::new(), IdentityFormatter)
    }

    #[test]
    fn construction_renders_the_starter_document() {
        let mut ed = editor();
        assert_eq!(ed.preview_mut().last(), Some(STARTER_DOCUMENT));
        assert_eq!(ed.preview_mut().len(), 1);
    }

    #[test]
    fn edits_fan_out_to_the_preview() {
        let mut ed = editor();
        ed.edit("<p>a</p>");
        ed.edit("<p>b</p>");
        assert_eq!(ed.preview_mut().len(), 3);
        assert_eq!(ed.preview_mut().last(), Some("<p>b</p>"));
    }

    #[test]
    fn identical_edit_pushes_nothing() {
        let mut ed = editor();
        ed.edit("<p>a</p>");
        let deliveries = ed.preview_mut().len();
        ed.edit("<p>a</p>");
        assert_eq!(ed.preview_mut().len(), deliveries);
        assert_eq!(ed.document().timeline_len(), 2);
    }

    #[test]
    fn boundary_undo_pushes_nothing() {
        let mut ed = editor();
        let deliveries = ed.preview_mut().len();
        ed.undo();
        assert_eq!(ed.preview_mut().len(), deliveries);
    }

    #[test]
    fn save_records_the_handoff_and_clears_dirty() {
        let mut ed = Editor::new(
            BufferPreview::new(),
            MemorySaveSink::new(),
            IdentityFormatter,
        );
        ed.open("<html></html>".to_string(), "x.html".to_string());
        ed.edit("<html><body/></html>");
        let snap = ed.save().unwrap();
        assert!(!snap.dirty);
        assert_eq!(
            ed.save_sink().last_saved(),
            Some(("<html><body/></html>", "x.html"))
        );

        // Saving pushes nothing to the preview.
        assert_eq!(ed.preview_mut().len(), 3);
    }

    #[test]
    fn failed_save_leaves_dirty_set() {
        let mut ed = Editor::new(BufferPreview::new(), FailingSaveSink, IdentityFormatter);
        ed.edit("<p>a</p>");
        let err = ed.save().unwrap_err();
        assert!(matches!(err, EditorError::SaveHandoff { .. }));
        assert!(ed.document().is_dirty());
    }

    #[test]
    fn format_applies_like_an_edit() {
        let mut ed = Editor::new(BufferPreview::new(), MemorySaveSink::new(), TrimFormatter);
        ed.edit("  <p>a</p>  ");
        let snap = ed.format().unwrap();
        assert_eq!(snap.content, "<p>a</p>");
        assert_eq!(ed.document().timeline_len(), 3);
        assert!(snap.dirty);
        assert_eq!(ed.preview_mut().last(), Some("<p>a</p>"));
    }

    #[test]
    fn format_with_identical_output_is_a_noop() {
        let mut ed = editor();
        ed.edit("<p>a</p>");
        ed.save().unwrap();
        let deliveries = ed.preview_mut().len();

        let snap = ed.format().unwrap();
        assert_eq!(ed.document().timeline_len(), 2);
        assert!(!snap.dirty);
        assert_eq!(ed.preview_mut().len(), deliveries);
    }

    #[test]
    fn failed_format_leaves_the_document_untouched() {
        let mut ed = Editor::new(BufferPreview::new(), MemorySaveSink::new(), FailingFormatter);
        ed.edit("<p>a</p>");
        ed.save().unwrap();
        let before = ed.document().clone();

        let err = ed.format().unwrap_err();
        assert!(matches!(err, EditorError::Reformat { .. }));
        assert_eq!(ed.document(), &before);
    }

    #[test]
    fn execute_dispatches_every_command() {
        let mut ed = editor();
        let snap = ed
            .execute(Command::Edit {
                content: "<p>a</p>".to_string(),
            })
            .unwrap();
        assert!(snap.dirty);

        let snap = ed.execute(Command::Undo).unwrap();
        assert!(!snap.can_undo);

        let snap = ed.execute(Command::Redo).unwrap();
        assert_eq!(snap.content, "<p>a</p>");

        let snap = ed
            .execute(Command::Open {
                content: "<html></html>".to_string(),
                file_name: "x.html".to_string(),
            })
            .unwrap();
        assert_eq!(snap.label, "x.html");
        assert!(!snap.dirty);

        let snap = ed.execute(Command::Snapshot).unwrap();
        assert_eq!(snap.content, "<html></html>");
    }

    #[test]
    fn refresh_preview_redelivers_current_content() {
        let mut ed = editor();
        ed.edit("<p>a</p>");
        let deliveries = ed.preview_mut().len();
        ed.refresh_preview();
        assert_eq!(ed.preview_mut().len(), deliveries + 1);
        assert_eq!(ed.preview_mut().last(), Some("<p>a</p>"));
    }
}
