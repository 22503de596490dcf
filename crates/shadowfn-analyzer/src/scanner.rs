//! Reference scanner
//!
//! Walks the complete body of an exported function and collects every
//! identifier occurrence whose bound resolution is the shadow target.
//! The comparison is on the symbol handle, never on the name, so locals
//! and params that merely share the name are excluded.

use shadowfn_ast::{Block, Expr, ExprKind, FileId, FunctionDecl, Span, Statement, StatementKind};
use shadowfn_symbols::{SymbolId, SymbolTable};

/// Collect the spans of every reference to `target` inside `func`, in
/// pre-order depth-first traversal order (= source order)
pub fn scan_calls(
    func: &FunctionDecl,
    file: FileId,
    target: SymbolId,
    table: &SymbolTable,
) -> Vec<Span> {
    let mut scanner = Scanner {
        file,
        target,
        table,
        sites: Vec::new(),
    };
    scanner.walk_block(&func.body);
    scanner.sites
}

struct Scanner<'t> {
    file: FileId,
    target: SymbolId,
    table: &'t SymbolTable,
    sites: Vec<Span>,
}

impl Scanner<'_> {
    fn walk_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.walk_statement(stmt);
        }
    }

    fn walk_statement(&mut self, stmt: &Statement) {
        match &stmt.kind {
            StatementKind::Let { value, .. } => self.walk_expr(value),
            StatementKind::Return(value) => {
                if let Some(value) = value {
                    self.walk_expr(value);
                }
            }
            StatementKind::Expr(expr) => self.walk_expr(expr),
            StatementKind::For {
                iterable, body, ..
            } => {
                self.walk_expr(iterable);
                self.walk_block(body);
            }
        }
    }

    fn walk_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(_) => {}
            ExprKind::Ident(_) => {
                if self.table.use_at(self.file, expr.span) == Some(self.target) {
                    self.sites.push(expr.span);
                }
            }
            ExprKind::Binary { left, right, .. } => {
                self.walk_expr(left);
                self.walk_expr(right);
            }
            ExprKind::Unary { operand, .. } => self.walk_expr(operand),
            ExprKind::Call { callee, args } => {
                self.walk_expr(callee);
                for arg in args {
                    self.walk_expr(arg);
                }
            }
            ExprKind::Field { object, .. } => self.walk_expr(object),
            ExprKind::Block(block) => self.walk_block(block),
            ExprKind::Closure { body, .. } => self.walk_expr(body),
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.walk_expr(condition);
                self.walk_block(then_branch);
                if let Some(else_branch) = else_branch {
                    self.walk_expr(else_branch);
                }
            }
            ExprKind::Match { scrutinee, arms } => {
                self.walk_expr(scrutinee);
                for arm in arms {
                    self.walk_expr(&arm.body);
                }
            }
        }
    }
}
