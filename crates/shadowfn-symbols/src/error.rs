//! Error types for binding

use shadowfn_ast::{FileId, Span};
use thiserror::Error;

/// Soft errors from binding a unit
///
/// None of these block analysis; they are returned next to the table for
/// hosts that want to surface them.
#[derive(Debug, Clone, Error)]
pub enum BindError {
    /// An identifier that resolves to no declaration in any scope
    #[error("unresolved identifier: {name}")]
    UnresolvedIdent {
        name: String,
        file: FileId,
        span: Span,
        /// The top-level declaration containing the identifier
        referrer: String,
    },
}

impl BindError {
    /// Get the source span of this error
    pub fn span(&self) -> Span {
        match self {
            BindError::UnresolvedIdent { span, .. } => *span,
        }
    }

    /// File the error was found in
    pub fn file(&self) -> FileId {
        match self {
            BindError::UnresolvedIdent { file, .. } => *file,
        }
    }
}
