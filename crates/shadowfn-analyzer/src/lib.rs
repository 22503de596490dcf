//! shadowfn-analyzer: shadow-pair detection
//!
//! Finds pairs of top-level functions where an exported function and an
//! unexported function share a name up to the case of the first letter
//! (`Foo` / `foo`), and reports where the exported wrapper references the
//! unexported twin. Four stages run in sequence over one unit: collect
//! declarations, match shadow names, scan the wrapper body for bound
//! references, report.
//!
//! The analysis is a pure function of the unit and its bound symbol
//! table; no state survives a run, and separate units can be analyzed on
//! separate threads.
//!
//! # Example
//!
//! ```ignore
//! use shadowfn_analyzer::{analyze, findings};
//! use shadowfn_symbols::bind;
//!
//! let table = bind(&unit).table;
//! let pairs = analyze(&unit, &table);
//! for f in findings(&unit, &pairs) {
//!     print!("{}", f.record());
//! }
//! ```

mod collector;
mod matcher;
mod report;
mod scanner;

pub use collector::{collect, collect_files, is_exported, DeclGroups, FuncRef};
pub use matcher::{find_shadow, shadow_name, ShadowTarget};
pub use report::{CollectedDiagnostics, Diagnostic, DiagnosticSink, Finding, FuncPair};
pub use scanner::scan_calls;

use shadowfn_ast::{FileId, SourceMap, Unit};
use shadowfn_symbols::SymbolTable;

/// Analyze a whole unit and return the confirmed pairs in discovery order
pub fn analyze<'u>(unit: &'u Unit, table: &SymbolTable) -> Vec<FuncPair<'u>> {
    let all: Vec<FileId> = unit.files_with_ids().map(|(id, _)| id).collect();
    analyze_files(unit, table, &all)
}

/// Analyze a subset of the unit's files
///
/// Shadow functions declared outside the subset are still found through
/// the package-scope fallback; their call sites are scanned the same way
/// since identifier resolutions cover the whole unit.
pub fn analyze_files<'u>(
    unit: &'u Unit,
    table: &SymbolTable,
    files: &[FileId],
) -> Vec<FuncPair<'u>> {
    let groups = collect_files(unit, files);
    let mut pairs = Vec::new();

    for (name, func) in &groups.exported {
        let Some(shadow) = find_shadow(name, &groups.unexported, table) else {
            continue;
        };
        let call_sites = scan_calls(func.decl, func.file, shadow.symbol(), table);
        pairs.push(FuncPair {
            exported: *func,
            shadow,
            call_sites,
        });
    }

    pairs
}

/// Analyze and emit one diagnostic per pair through the sink
///
/// Each diagnostic is anchored at the exported declaration and carries
/// the legacy record text as its message. Returns the pairs as well, for
/// callers that want both forms.
pub fn run<'u>(
    unit: &'u Unit,
    table: &SymbolTable,
    sink: &mut dyn DiagnosticSink,
) -> Vec<FuncPair<'u>> {
    let map = SourceMap::new(unit);
    let pairs = analyze(unit, table);

    for pair in &pairs {
        let finding = Finding::from_pair(pair, &map);
        sink.report(Diagnostic {
            file: pair.exported.file,
            span: pair.exported.decl.span,
            message: finding.record(),
        });
    }

    pairs
}

/// Resolve pairs into position-level finding records
pub fn findings(unit: &Unit, pairs: &[FuncPair<'_>]) -> Vec<Finding> {
    let map = SourceMap::new(unit);
    pairs
        .iter()
        .map(|pair| Finding::from_pair(pair, &map))
        .collect()
}
