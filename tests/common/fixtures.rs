//! Unit fixtures for integration tests
//!
//! Each fixture pairs a source text with the AST a host parser would have
//! produced for it; spans are located by searching the text so that
//! asserted line/column values stay honest.

use shadowfn_ast::*;

/// Span of the nth occurrence (1-based) of `needle` in `text`
pub fn span_of(text: &str, needle: &str, nth: usize) -> Span {
    let start = text
        .match_indices(needle)
        .nth(nth - 1)
        .map(|(i, _)| i)
        .unwrap_or_else(|| panic!("occurrence {} of {:?} not found", nth, needle));
    Span::new(start, start + needle.len())
}

pub fn ident_at(text: &str, name: &str, nth: usize) -> Expr {
    Expr {
        kind: ExprKind::Ident(name.to_string()),
        span: span_of(text, name, nth),
    }
}

/// Zero-argument call of the nth occurrence of `name`
pub fn call_at(text: &str, name: &str, nth: usize) -> Expr {
    let callee = ident_at(text, name, nth);
    let span = Span::new(callee.span.start, callee.span.end + 2);
    Expr {
        kind: ExprKind::Call {
            callee: Box::new(callee),
            args: Vec::new(),
        },
        span,
    }
}

pub fn int_at(text: &str, literal: &str, nth: usize, value: i64) -> Expr {
    Expr {
        kind: ExprKind::Literal(Literal::Int(value)),
        span: span_of(text, literal, nth),
    }
}

pub fn expr_stmt(expr: Expr) -> Statement {
    Statement {
        span: expr.span,
        kind: StatementKind::Expr(expr),
    }
}

pub fn let_stmt(text: &str, name: &str, nth: usize, value: Expr) -> Statement {
    let name_span = span_of(text, name, nth);
    Statement {
        span: Span::new(name_span.start, value.span.end),
        kind: StatementKind::Let {
            name: name.to_string(),
            name_span,
            value,
        },
    }
}

pub fn fn_decl(text: &str, name: &str, nth: usize, statements: Vec<Statement>) -> Decl {
    let name_span = span_of(text, name, nth);
    let body_span = statements
        .iter()
        .fold(name_span, |acc, s| acc.merge(s.span));
    let span = Span::new(name_span.start.saturating_sub(3), body_span.end);
    Decl {
        kind: DeclKind::Function(FunctionDecl {
            name: name.to_string(),
            name_span,
            params: Vec::new(),
            body: Block {
                statements,
                span: body_span,
            },
            span,
        }),
        span,
    }
}

pub fn var_decl(text: &str, name: &str, nth: usize, value: Option<Expr>) -> Decl {
    let name_span = span_of(text, name, nth);
    let span = value
        .as_ref()
        .map(|v| name_span.merge(v.span))
        .unwrap_or(name_span);
    Decl {
        kind: DeclKind::Var(VarDecl {
            name: name.to_string(),
            name_span,
            value,
            span,
        }),
        span,
    }
}

pub fn source_file(name: &str, text: &str, decls: Vec<Decl>) -> SourceFile {
    SourceFile {
        name: name.to_string(),
        text: text.to_string(),
        decls,
    }
}

pub const WRAPPER_SRC: &str = "fn Bar() {\n  bar()\n  let x = 1\n  bar()\n}\n\nfn bar() {\n}\n";

/// `Bar` wraps `bar` and calls it twice
pub fn wrapper_unit() -> Unit {
    let text = WRAPPER_SRC;
    let wrapper = fn_decl(
        text,
        "Bar",
        1,
        vec![
            expr_stmt(call_at(text, "bar", 1)),
            let_stmt(text, "x", 1, int_at(text, "1", 1, 1)),
            expr_stmt(call_at(text, "bar", 2)),
        ],
    );
    let shadow = fn_decl(text, "bar", 3, Vec::new());
    Unit::new(vec![source_file("a.sf", text, vec![wrapper, shadow])])
}

/// `Baz` with no shadow function anywhere
pub fn no_shadow_unit() -> Unit {
    let text = "fn Baz() {\n}\n";
    let decl = fn_decl(text, "Baz", 1, Vec::new());
    Unit::new(vec![source_file("a.sf", text, vec![decl])])
}

/// `Qux` and `qux` both declared, but the wrapper never references the
/// shadow
pub fn unreferenced_pair_unit() -> Unit {
    let text = "fn Qux() {\n}\n\nfn qux() {\n}\n";
    let exported = fn_decl(text, "Qux", 1, Vec::new());
    let shadow = fn_decl(text, "qux", 1, Vec::new());
    Unit::new(vec![source_file("a.sf", text, vec![exported, shadow])])
}

/// `Foo` uses a local named `foo`; the real function `foo` is never
/// referenced
pub fn local_shadow_unit() -> Unit {
    let text = "fn Foo() {\n  let foo = 1\n  foo\n}\n\nfn foo() {\n}\n";
    let exported = fn_decl(
        text,
        "Foo",
        1,
        vec![
            let_stmt(text, "foo", 1, int_at(text, "1", 1, 1)),
            expr_stmt(ident_at(text, "foo", 2)),
        ],
    );
    let shadow = fn_decl(text, "foo", 3, Vec::new());
    Unit::new(vec![source_file("a.sf", text, vec![exported, shadow])])
}

/// The shadow name exists but names a package variable, not a function
pub fn var_shadow_unit() -> Unit {
    let text = "fn Foo() {\n  foo\n}\n\nvar foo = 2\n";
    let exported = fn_decl(text, "Foo", 1, vec![expr_stmt(ident_at(text, "foo", 1))]);
    let var = var_decl(text, "foo", 2, Some(int_at(text, "2", 1, 2)));
    Unit::new(vec![source_file("a.sf", text, vec![exported, var])])
}

pub const TWO_FILE_A_SRC: &str = "fn Bar() {\n  bar()\n}\n";
pub const TWO_FILE_B_SRC: &str = "fn bar() {\n}\n";

/// Wrapper and shadow split across two files of the same unit
pub fn two_file_unit() -> Unit {
    let wrapper = fn_decl(
        TWO_FILE_A_SRC,
        "Bar",
        1,
        vec![expr_stmt(call_at(TWO_FILE_A_SRC, "bar", 1))],
    );
    let shadow = fn_decl(TWO_FILE_B_SRC, "bar", 1, Vec::new());
    Unit::new(vec![
        source_file("a.sf", TWO_FILE_A_SRC, vec![wrapper]),
        source_file("b.sf", TWO_FILE_B_SRC, vec![shadow]),
    ])
}

/// Two independent pairs, one per file, to pin down discovery order
pub fn multi_pair_unit() -> Unit {
    let a = "fn Alpha() {\n  alpha()\n}\n\nfn alpha() {\n}\n";
    let b = "fn Beta() {\n  beta()\n}\n\nfn beta() {\n}\n";
    let alpha_wrap = fn_decl(a, "Alpha", 1, vec![expr_stmt(call_at(a, "alpha", 1))]);
    let alpha = fn_decl(a, "alpha", 2, Vec::new());
    let beta_wrap = fn_decl(b, "Beta", 1, vec![expr_stmt(call_at(b, "beta", 1))]);
    let beta = fn_decl(b, "beta", 2, Vec::new());
    Unit::new(vec![
        source_file("a.sf", a, vec![alpha_wrap, alpha]),
        source_file("b.sf", b, vec![beta_wrap, beta]),
    ])
}

/// A call buried under for/if/closure nesting
pub fn deep_nesting_unit() -> Unit {
    let text = "fn Bar() {\n  for x in items {\n    if x {\n      |y| bar(y)\n    }\n  }\n}\n\nfn bar() {\n}\n\nvar items = 0\n";

    let call = Expr {
        kind: ExprKind::Call {
            callee: Box::new(ident_at(text, "bar", 1)),
            args: vec![ident_at(text, "y", 2)],
        },
        span: span_of(text, "bar(y)", 1),
    };
    let closure = Expr {
        span: span_of(text, "|y| bar(y)", 1),
        kind: ExprKind::Closure {
            params: vec![ClosureParam {
                name: "y".to_string(),
                span: span_of(text, "y", 1),
            }],
            body: Box::new(call),
        },
    };
    let if_expr = Expr {
        span: span_of(text, "if x", 1).merge(span_of(text, "|y| bar(y)", 1)),
        kind: ExprKind::If {
            condition: Box::new(ident_at(text, "x", 2)),
            then_branch: Block {
                statements: vec![expr_stmt(closure)],
                span: span_of(text, "|y| bar(y)", 1),
            },
            else_branch: None,
        },
    };
    let for_stmt = Statement {
        span: span_of(text, "for", 1).merge(if_expr.span),
        kind: StatementKind::For {
            binding: "x".to_string(),
            binding_span: span_of(text, "x", 1),
            iterable: ident_at(text, "items", 1),
            body: Block {
                span: if_expr.span,
                statements: vec![expr_stmt(if_expr)],
            },
        },
    };

    let wrapper = fn_decl(text, "Bar", 1, vec![for_stmt]);
    let shadow = fn_decl(text, "bar", 2, Vec::new());
    let items = var_decl(text, "items", 2, Some(int_at(text, "0", 1, 0)));
    Unit::new(vec![source_file("a.sf", text, vec![wrapper, shadow, items])])
}
