//! Compilation unit and file containers

use serde::{Deserialize, Serialize};
use crate::Decl;

/// Index of a file within its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u32);

/// One source file of a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path or name of the file; only the base name appears in output
    pub name: String,
    /// Raw source text, used to resolve byte offsets to line/column
    pub text: String,
    /// Top-level declarations in source order
    pub decls: Vec<Decl>,
}

/// A compilation unit: the ordered set of files analyzed together under
/// one symbol table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Unit {
    pub files: Vec<SourceFile>,
}

impl Unit {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0 as usize)
    }

    /// Iterate files with their ids, in unit order
    pub fn files_with_ids(&self) -> impl Iterator<Item = (FileId, &SourceFile)> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, f)| (FileId(i as u32), f))
    }
}
