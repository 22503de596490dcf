//! Statement AST nodes

use serde::{Deserialize, Serialize};
use crate::{Expr, Literal, Span};

/// A block of statements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// A statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StatementKind {
    /// Let binding: `let x = 5`
    Let {
        name: String,
        name_span: Span,
        value: Expr,
    },

    /// Return statement: `return x`
    Return(Option<Expr>),

    /// Expression statement: `foo()`
    Expr(Expr),

    /// For loop: `for x in items { ... }`
    For {
        binding: String,
        binding_span: Span,
        iterable: Expr,
        body: Block,
    },
}

/// Pattern for match expressions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PatternKind {
    /// Wildcard: `_`
    Wildcard,

    /// Binding: `x`
    Binding(String),

    /// Literal: `42`, `"hello"`
    Literal(Literal),
}

/// A match arm: `pattern => expr`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub body: Expr,
    pub span: Span,
}
