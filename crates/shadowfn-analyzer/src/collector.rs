//! Declaration collector
//!
//! Splits a unit's top-level functions into exported and unexported
//! groups. Insertion order is encounter order across the unit's file
//! list, which is what makes the final report order deterministic.

use indexmap::IndexMap;
use shadowfn_ast::{DeclKind, FileId, FunctionDecl, Unit};

/// A top-level function together with the file declaring it
#[derive(Debug, Clone, Copy)]
pub struct FuncRef<'u> {
    pub file: FileId,
    pub decl: &'u FunctionDecl,
}

/// The two visibility groups of a unit's top-level functions
#[derive(Debug, Default)]
pub struct DeclGroups<'u> {
    pub exported: IndexMap<String, FuncRef<'u>>,
    pub unexported: IndexMap<String, FuncRef<'u>>,
}

/// Exported iff the name's first character is uppercase
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Collect every top-level function of the unit
pub fn collect(unit: &Unit) -> DeclGroups<'_> {
    let all: Vec<FileId> = unit.files_with_ids().map(|(id, _)| id).collect();
    collect_files(unit, &all)
}

/// Collect top-level functions from a subset of the unit's files
///
/// The subset models a partially-loaded analysis context; functions in the
/// remaining files stay reachable through the symbol-table fallback.
pub fn collect_files<'u>(unit: &'u Unit, files: &[FileId]) -> DeclGroups<'u> {
    let mut groups = DeclGroups::default();

    for &file_id in files {
        let Some(file) = unit.file(file_id) else {
            continue;
        };
        for decl in &file.decls {
            let DeclKind::Function(func) = &decl.kind else {
                continue;
            };
            let entry = FuncRef {
                file: file_id,
                decl: func,
            };
            // Same name and visibility twice: last seen wins
            if is_exported(&func.name) {
                groups.exported.insert(func.name.clone(), entry);
            } else {
                groups.unexported.insert(func.name.clone(), entry);
            }
        }
    }

    groups
}
