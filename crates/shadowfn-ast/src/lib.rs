//! shadowfn AST - source model for the shadow-pair analyzer
//!
//! This crate defines the parsed representation a host hands to the
//! analyzer: spans, files and units, top-level declarations, statement and
//! expression nodes, and the source map that resolves byte offsets to
//! line/column positions.

mod span;
mod unit;
mod decl;
mod stmt;
mod expr;
mod source_map;

pub use span::*;
pub use unit::*;
pub use decl::*;
pub use stmt::*;
pub use expr::*;
pub use source_map::*;
