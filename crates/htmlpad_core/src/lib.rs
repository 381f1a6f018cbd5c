#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Collaborator contracts (preview surface, save bridge, formatter)
pub mod bridge;

/// Command layer (serializable editor commands)
pub mod command;

/// Document history store
pub mod document;

/// Lifecycle controller
pub mod editor;

/// Error (common error types)
pub mod error;

/// Starter document and file naming defaults
pub mod template;
