//! Findings, diagnostics, and the reporting sink

use serde::{Deserialize, Serialize};
use shadowfn_ast::{FileId, Position, SourceMap, Span};

use crate::{FuncRef, ShadowTarget};

/// A confirmed exported/shadow pair
///
/// `call_sites` holds the identifier spans inside the exported body that
/// resolve to the shadow, in source order; it is empty when the name pair
/// exists but the wrapper never references the shadow. Pairs are reported
/// either way.
#[derive(Debug)]
pub struct FuncPair<'u> {
    pub exported: FuncRef<'u>,
    pub shadow: ShadowTarget<'u>,
    pub call_sites: Vec<Span>,
}

impl FuncPair<'_> {
    pub fn exported_name(&self) -> &str {
        &self.exported.decl.name
    }
}

/// Position-resolved finding record, the structured output form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub func_name: String,
    pub target_pos: Position,
    pub called_pos: Vec<Position>,
}

impl Finding {
    pub fn from_pair(pair: &FuncPair<'_>, map: &SourceMap) -> Self {
        let (shadow_file, shadow_span) = pair.shadow.def_site();
        Self {
            func_name: pair.exported.decl.name.clone(),
            target_pos: map.position(shadow_file, shadow_span.start),
            called_pos: pair
                .call_sites
                .iter()
                .map(|span| map.position(pair.exported.file, span.start))
                .collect(),
        }
    }

    /// Render the legacy record text consumed by downstream tooling
    ///
    /// The format is a compatibility contract and must stay byte-stable:
    /// positions are `file:column:line` (column first), and the record
    /// ends with a newline.
    pub fn record(&self) -> String {
        let mut out = format!(
            "{{FuncName:{}, TargetPos:\"{}\", CalledPos:[",
            self.func_name,
            pos_field(&self.target_pos)
        );
        let sites: Vec<String> = self
            .called_pos
            .iter()
            .map(|p| format!("\"{}\"", pos_field(p)))
            .collect();
        out.push_str(&sites.join(", "));
        out.push_str("]}\n");
        out
    }
}

fn pos_field(pos: &Position) -> String {
    format!("{}:{}:{}", pos.file, pos.col, pos.line)
}

/// One emitted diagnostic, anchored at the exported declaration
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: FileId,
    pub span: Span,
    pub message: String,
}

/// The host's reporting sink
pub trait DiagnosticSink {
    fn report(&mut self, diag: Diagnostic);
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectedDiagnostics {
    fn report(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }
}
