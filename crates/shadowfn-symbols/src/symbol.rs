//! Symbol information and types

use serde::{Deserialize, Serialize};
use shadowfn_ast::{FileId, Span};

/// Unique identifier for a symbol in the table
///
/// Resolution results are compared by this handle alone; two symbols with
/// the same name are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Kind of symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Top-level function
    Function,
    /// Package-level variable
    Var,
    /// Type alias
    TypeAlias,
    /// Function or closure parameter
    Param,
    /// Local binding (`let`, `for`, match arm)
    Local,
}

/// A declared symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique ID assigned during binding
    pub id: SymbolId,

    /// Declared name
    pub name: String,

    /// Kind of symbol
    pub kind: SymbolKind,

    /// File the declaration lives in
    pub file: FileId,

    /// Span of the defining name token
    pub name_span: Span,
}

impl Symbol {
    /// Whether this symbol can appear as a call target
    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    /// Whether this symbol lives in package scope
    pub fn is_package_level(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::Function | SymbolKind::Var | SymbolKind::TypeAlias
        )
    }
}
