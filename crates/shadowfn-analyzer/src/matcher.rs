//! Pair matcher
//!
//! Derives the shadow name of an exported function and resolves it to a
//! callable target, preferring the locally-collected declaration and
//! falling back to package-scope resolution.

use indexmap::IndexMap;
use shadowfn_ast::{FileId, FunctionDecl, Span};
use shadowfn_symbols::{SymbolId, SymbolTable};

use crate::FuncRef;

/// The resolved shadow target of an exported function
#[derive(Debug, Clone, Copy)]
pub enum ShadowTarget<'u> {
    /// Declared in the walked file set; the full declaration is at hand
    Decl {
        decl: &'u FunctionDecl,
        file: FileId,
        symbol: SymbolId,
    },
    /// Known only through package scope (declared in a file outside the
    /// walked set)
    Symbol {
        symbol: SymbolId,
        file: FileId,
        name_span: Span,
    },
}

impl ShadowTarget<'_> {
    /// The declaration-identity handle the scanner compares against
    pub fn symbol(&self) -> SymbolId {
        match self {
            ShadowTarget::Decl { symbol, .. } => *symbol,
            ShadowTarget::Symbol { symbol, .. } => *symbol,
        }
    }

    /// Definition site of the shadow's name token
    pub fn def_site(&self) -> (FileId, Span) {
        match self {
            ShadowTarget::Decl { decl, file, .. } => (*file, decl.name_span),
            ShadowTarget::Symbol {
                file, name_span, ..
            } => (*file, *name_span),
        }
    }
}

/// Derive the candidate shadow name: first character lowered, remainder
/// unchanged
///
/// Only an ASCII uppercase first letter folds; every other name (ASCII
/// lowercase, digits, underscores, non-ASCII letters) maps to itself,
/// which keeps the fold idempotent and length-preserving.
pub fn shadow_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut folded = String::with_capacity(name.len());
            folded.push(first.to_ascii_lowercase());
            folded.push_str(chars.as_str());
            folded
        }
        _ => name.to_string(),
    }
}

/// Resolve the shadow target for one exported function, if any
///
/// Tier 1 is the unexported map built by the collector; tier 2 is the
/// unit's package scope, accepting only function symbols. A name that
/// folds to itself never matches, so a function cannot pair with itself.
pub fn find_shadow<'u>(
    exported_name: &str,
    unexported: &IndexMap<String, FuncRef<'u>>,
    table: &SymbolTable,
) -> Option<ShadowTarget<'u>> {
    let shadow = shadow_name(exported_name);
    if shadow == exported_name {
        return None;
    }

    if let Some(func) = unexported.get(&shadow) {
        if let Some(symbol) = table.def_at(func.file, func.decl.name_span) {
            return Some(ShadowTarget::Decl {
                decl: func.decl,
                file: func.file,
                symbol,
            });
        }
    }

    let symbol = table.resolve(&shadow)?;
    if !symbol.is_function() {
        return None;
    }
    Some(ShadowTarget::Symbol {
        symbol: symbol.id,
        file: symbol.file,
        name_span: symbol.name_span,
    })
}
