//! Patcher trait definition

use std::path::PathBuf;

/// Trait for rewriting the version references of a document
///
/// Implementations are pure: the same content and target always yield the
/// same output, and patching an already patched document is a no-op.
pub trait Patcher {
    /// Compute the patched content
    fn patch(&self, content: &str) -> Result<String, PatchError>;
}

/// Error type for patching operations
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// Reading or writing the document failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the document structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
