//! Byte-offset to line/column resolution

use std::path::Path;

use serde::{Deserialize, Serialize};
use crate::{FileId, Unit};

/// A resolved source position
///
/// `file` is the base name of the containing file; `line` and `col` are
/// 1-based, with columns counted in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub file: String,
    pub line: u32,
    pub col: u32,
}

/// Line-start index for one file
#[derive(Debug, Clone)]
struct LineIndex {
    /// Byte offset of the start of each line, first entry always 0
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based (line, col) of a byte offset
    fn line_col(&self, offset: usize) -> (u32, u32) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        (line as u32 + 1, col as u32 + 1)
    }
}

/// Position resolver for a whole unit
///
/// Built once per analysis from the unit's file texts; lookups after that
/// are cheap binary searches.
#[derive(Debug, Clone)]
pub struct SourceMap {
    base_names: Vec<String>,
    indexes: Vec<LineIndex>,
}

impl SourceMap {
    pub fn new(unit: &Unit) -> Self {
        let base_names = unit.files.iter().map(|f| base_name(&f.name)).collect();
        let indexes = unit.files.iter().map(|f| LineIndex::new(&f.text)).collect();
        Self { base_names, indexes }
    }

    /// Resolve a byte offset in a file to a full position
    pub fn position(&self, file: FileId, offset: usize) -> Position {
        let idx = file.0 as usize;
        let (line, col) = match self.indexes.get(idx) {
            Some(index) => index.line_col(offset),
            None => (1, 1),
        };
        let file = self
            .base_names
            .get(idx)
            .cloned()
            .unwrap_or_default();
        Position { file, line, col }
    }
}

fn base_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
        .to_string()
}
