//! Error types for the traversal bridge

use thiserror::Error;

/// Result type alias using the bridge's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Traversal bridge error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Relationship list must have a non-zero even length, got {0}")]
    MalformedRelationshipList(usize),

    #[error("Expected relationship type at position {position}, found {found}")]
    InvalidRelationshipType { position: usize, found: String },

    #[error("Expected direction at position {position}, found {found}")]
    InvalidDirection { position: usize, found: String },

    #[error("Unsupported traversal: {0}")]
    Unsupported(&'static str),

    #[error("Remote traversal failed: {0}")]
    Remote(String),
}
