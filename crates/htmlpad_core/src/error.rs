use serde::Serialize;
use thiserror::Error;

/// Unified error type for htmlpad operations
///
/// There are no fatal errors in the editor core: a reformat failure is
/// recovered with the document untouched, and a save hand-off failure
/// leaves the dirty flag set. Boundary undo/redo calls are silent no-ops,
/// not errors.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The host's markup reinterpretation failed.
    #[error("failed to reformat document: {message}")]
    Reformat {
        /// Description of the underlying failure.
        message: String,
    },

    /// The save collaborator did not complete the hand-off.
    #[error("failed to hand off '{label}' for saving: {message}")]
    SaveHandoff {
        /// Label of the document being saved.
        label: String,
        /// Description of the underlying failure.
        message: String,
    },
}

/// Result type alias for htmlpad operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// A serializable representation of EditorError for the JS boundary
#[derive(Debug, Clone, Serialize)]
pub struct SerializableError {
    /// Error kind/variant name
    pub kind: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&EditorError> for SerializableError {
    fn from(err: &EditorError) -> Self {
        let kind = match err {
            EditorError::Reformat { .. } => "Reformat",
            EditorError::SaveHandoff { .. } => "SaveHandoff",
        }
        .to_string();

        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<EditorError> for SerializableError {
    fn from(err: EditorError) -> Self {
        SerializableError::from(&err)
    }
}

impl EditorError {
    /// Convert to a serializable representation for the JS boundary
    pub fn to_serializable(&self) -> SerializableError {
        SerializableError::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializable_error_carries_kind_and_message() {
        let err = EditorError::SaveHandoff {
            label: "page.html".to_string(),
            message: "no window available".to_string(),
        };
        let ser = err.to_serializable();
        assert_eq!(ser.kind, "SaveHandoff");
        assert!(ser.message.contains("page.html"));
        assert!(ser.message.contains("no window available"));
    }
}
