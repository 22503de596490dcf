//! Two-pass binder
//!
//! Pass 1 collects every top-level declaration into package scope. Pass 2
//! walks function bodies and package-variable initializers under lexical
//! scoping and records a resolution for every identifier occurrence.

use std::collections::HashMap;

use shadowfn_ast::{
    Block, Decl, DeclKind, Expr, ExprKind, FileId, FunctionDecl, PatternKind, Statement,
    StatementKind, Unit, VarDecl,
};
use crate::{BindError, BindResult, SymbolId, SymbolKind, SymbolTable};

/// One lexical scope: params, lets, loop and arm bindings
#[derive(Debug, Default)]
struct Scope {
    names: HashMap<String, SymbolId>,
}

pub(crate) struct Binder<'u> {
    unit: &'u Unit,
    table: SymbolTable,
    scopes: Vec<Scope>,
    errors: Vec<BindError>,
    current_file: FileId,
    current_decl: String,
}

impl<'u> Binder<'u> {
    pub(crate) fn new(unit: &'u Unit) -> Self {
        Self {
            unit,
            table: SymbolTable::new(),
            scopes: Vec::new(),
            errors: Vec::new(),
            current_file: FileId(0),
            current_decl: String::new(),
        }
    }

    pub(crate) fn bind(mut self) -> BindResult {
        // Pass 1: package scope
        for (file_id, file) in self.unit.files_with_ids() {
            for decl in &file.decls {
                self.collect_decl(file_id, decl);
            }
        }

        // Pass 2: bodies
        for (file_id, file) in self.unit.files_with_ids() {
            self.current_file = file_id;
            for decl in &file.decls {
                match &decl.kind {
                    DeclKind::Function(f) => self.bind_function(f),
                    DeclKind::Var(v) => self.bind_var(v),
                    DeclKind::TypeAlias(_) => {}
                }
            }
        }

        BindResult {
            table: self.table,
            unresolved: self.errors,
        }
    }

    fn collect_decl(&mut self, file: FileId, decl: &Decl) {
        let kind = match &decl.kind {
            DeclKind::Function(_) => SymbolKind::Function,
            DeclKind::Var(_) => SymbolKind::Var,
            DeclKind::TypeAlias(_) => SymbolKind::TypeAlias,
        };
        let id = self
            .table
            .alloc(decl.name().to_string(), kind, file, decl.name_span());
        self.table.define_package(id);
    }

    fn bind_function(&mut self, func: &FunctionDecl) {
        self.current_decl = func.name.clone();
        self.enter_scope();

        for param in &func.params {
            self.define_local(&param.name, SymbolKind::Param, param.span);
        }
        self.bind_block_statements(&func.body);

        self.exit_scope();
    }

    fn bind_var(&mut self, var: &VarDecl) {
        self.current_decl = var.name.clone();
        if let Some(value) = &var.value {
            self.bind_expr(value);
        }
    }

    fn bind_block(&mut self, block: &Block) {
        self.enter_scope();
        self.bind_block_statements(block);
        self.exit_scope();
    }

    fn bind_block_statements(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.bind_statement(stmt);
        }
    }

    fn bind_statement(&mut self, stmt: &Statement) {
        match &stmt.kind {
            StatementKind::Let {
                name,
                name_span,
                value,
            } => {
                // The binding is visible only after its initializer
                self.bind_expr(value);
                self.define_local(name, SymbolKind::Local, *name_span);
            }
            StatementKind::Return(value) => {
                if let Some(value) = value {
                    self.bind_expr(value);
                }
            }
            StatementKind::Expr(expr) => self.bind_expr(expr),
            StatementKind::For {
                binding,
                binding_span,
                iterable,
                body,
            } => {
                self.bind_expr(iterable);
                self.enter_scope();
                self.define_local(binding, SymbolKind::Local, *binding_span);
                self.bind_block_statements(body);
                self.exit_scope();
            }
        }
    }

    fn bind_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(_) => {}
            ExprKind::Ident(name) => {
                if let Some(id) = self.lookup(name) {
                    self.table.record_use(self.current_file, expr.span, id);
                } else {
                    self.errors.push(BindError::UnresolvedIdent {
                        name: name.clone(),
                        file: self.current_file,
                        span: expr.span,
                        referrer: self.current_decl.clone(),
                    });
                }
            }
            ExprKind::Binary { left, right, .. } => {
                self.bind_expr(left);
                self.bind_expr(right);
            }
            ExprKind::Unary { operand, .. } => self.bind_expr(operand),
            ExprKind::Call { callee, args } => {
                self.bind_expr(callee);
                for arg in args {
                    self.bind_expr(arg);
                }
            }
            ExprKind::Field { object, .. } => self.bind_expr(object),
            ExprKind::Block(block) => self.bind_block(block),
            ExprKind::Closure { params, body } => {
                self.enter_scope();
                for param in params {
                    self.define_local(&param.name, SymbolKind::Param, param.span);
                }
                self.bind_expr(body);
                self.exit_scope();
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.bind_expr(condition);
                self.bind_block(then_branch);
                if let Some(else_branch) = else_branch {
                    self.bind_expr(else_branch);
                }
            }
            ExprKind::Match { scrutinee, arms } => {
                self.bind_expr(scrutinee);
                for arm in arms {
                    self.enter_scope();
                    if let PatternKind::Binding(name) = &arm.pattern.kind {
                        self.define_local(name, SymbolKind::Local, arm.pattern.span);
                    }
                    self.bind_expr(&arm.body);
                    self.exit_scope();
                }
            }
        }
    }

    fn define_local(&mut self, name: &str, kind: SymbolKind, span: shadowfn_ast::Span) {
        let id = self
            .table
            .alloc(name.to_string(), kind, self.current_file, span);
        if let Some(scope) = self.scopes.last_mut() {
            scope.names.insert(name.to_string(), id);
        }
    }

    /// Innermost scope outward, then package scope
    fn lookup(&self, name: &str) -> Option<SymbolId> {
        for scope in self.scopes.iter().rev() {
            if let Some(&id) = scope.names.get(name) {
                return Some(id);
            }
        }
        self.table.resolve(name).map(|s| s.id)
    }

    fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    fn exit_scope(&mut self) {
        self.scopes.pop();
    }
}
