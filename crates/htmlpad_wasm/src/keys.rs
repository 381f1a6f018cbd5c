//! Keyboard shortcut surface.
//!
//! Maps the editor's chords to commands: save is Ctrl/Cmd+S, undo is
//! Ctrl/Cmd+Z, redo is Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y. Matched chords
//! intercept the browser's default behavior; everything else is left
//! alone.

use htmlpad_core::command::Command;

/// Map a keyboard chord to an editor command.
///
/// `primary` is the platform accelerator (Ctrl, or Cmd on macOS). `key`
/// is the DOM `KeyboardEvent.key` value; letter case is normalized so
/// shifted chords match. Returns `None` for chords the editor does not
/// own.
pub fn command_for_chord(primary: bool, shift: bool, key: &str) -> Option<Command> {
    if !primary {
        return None;
    }
    match (key.to_ascii_lowercase().as_str(), shift) {
        ("s", false) => Some(Command::Save),
        ("z", false) => Some(Command::Undo),
        ("z", true) => Some(Command::Redo),
        ("y", false) => Some(Command::Redo),
        _ => None,
    }
}
