//! shadowfn-symbols: symbol table and binder
//!
//! This crate plays the host's semantic-analysis role: it turns a parsed
//! unit into a bound symbol table that answers package-scope name lookups
//! and maps every identifier occurrence to the declaration it refers to.
//! Identifiers that resolve to nothing are soft errors returned next to
//! the table; they never block analysis.
//!
//! # Example
//!
//! ```ignore
//! use shadowfn_symbols::bind;
//!
//! let result = bind(&unit);
//! let table = result.table;
//! assert!(table.resolve("bar").is_some());
//! ```

mod binder;
mod error;
mod symbol;
mod table;

pub use error::BindError;
pub use symbol::{Symbol, SymbolId, SymbolKind};
pub use table::SymbolTable;

use binder::Binder;
use shadowfn_ast::Unit;

/// Result of binding a unit
#[derive(Debug)]
pub struct BindResult {
    /// The bound symbol table
    pub table: SymbolTable,
    /// Identifiers that resolved to no declaration (soft errors)
    pub unresolved: Vec<BindError>,
}

/// Bind a unit: collect package scope, then resolve every identifier in
/// every function body and package-variable initializer
pub fn bind(unit: &Unit) -> BindResult {
    Binder::new(unit).bind()
}
