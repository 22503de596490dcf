//! Declaration AST nodes (top-level items)

use serde::{Deserialize, Serialize};
use crate::{Block, Expr, Span};

/// A top-level declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decl {
    pub kind: DeclKind,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeclKind {
    /// Function declaration: `fn foo(x) { ... }`
    Function(FunctionDecl),

    /// Package-level variable: `var limit = 10`
    Var(VarDecl),

    /// Type alias: `type UserId = Int`
    TypeAlias(TypeAliasDecl),
}

impl Decl {
    /// The name introduced by this declaration
    pub fn name(&self) -> &str {
        match &self.kind {
            DeclKind::Function(f) => &f.name,
            DeclKind::Var(v) => &v.name,
            DeclKind::TypeAlias(t) => &t.name,
        }
    }

    /// Span of the name token
    pub fn name_span(&self) -> Span {
        match &self.kind {
            DeclKind::Function(f) => f.name_span,
            DeclKind::Var(v) => v.name_span,
            DeclKind::TypeAlias(t) => t.name_span,
        }
    }
}

/// Function declaration
///
/// `name_span` is the range of the name token alone; `span` covers the
/// whole declaration and anchors diagnostics about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub name_span: Span,
    pub params: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

/// Function parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub span: Span,
}

/// Package-level variable declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    pub name_span: Span,
    pub value: Option<Expr>,
    pub span: Span,
}

/// Type alias declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: String,
    pub name_span: Span,
    pub target: String,
    pub span: Span,
}
