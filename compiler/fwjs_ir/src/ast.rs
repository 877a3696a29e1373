//! Expression tree.
//!
//! A program is a single `Expr`. Statement lists are chains of left-nested
//! `Seq` nodes (see [`Expr::seq_list`]); an empty list has no tree at all.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::{Name, Span};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,
    Eq,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Eq => "==",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Literal values that can appear in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `42`, `true`, `null`
    Literal(Literal),
    /// `x`
    VarRef(Name),
    /// `var x` / `var x = init`
    VarDecl {
        name: Name,
        init: Option<Box<Expr>>,
    },
    /// `x = value`
    Assign { name: Name, value: Box<Expr> },
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `if (cond) { .. } else { .. }`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    /// `while (cond) body`
    While { cond: Box<Expr>, body: Box<Expr> },
    /// `first; second`
    Seq { first: Box<Expr>, second: Box<Expr> },
    /// `function(a, b) { .. }`
    FuncDecl { params: Vec<Name>, body: SharedExpr },
    /// `callee(args..)`
    FuncApp { callee: Box<Expr>, args: Vec<Expr> },
    /// `print(expr);`
    Print(Box<Expr>),
}

/// Reference-counted expression, shared between the tree and the closures
/// created from it.
#[derive(Clone, Debug)]
pub struct SharedExpr(Arc<Expr>);

impl SharedExpr {
    pub fn new(expr: Expr) -> Self {
        SharedExpr(Arc::new(expr))
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &SharedExpr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedExpr {
    type Target = Expr;

    fn deref(&self) -> &Expr {
        &self.0
    }
}

impl PartialEq for SharedExpr {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl From<Expr> for SharedExpr {
    fn from(expr: Expr) -> Self {
        SharedExpr::new(expr)
    }
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Replace the span, keeping the node.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    // Constructors for trees built in code. All use `Span::DUMMY`.

    pub fn literal(lit: Literal) -> Self {
        Self::new(ExprKind::Literal(lit), Span::DUMMY)
    }

    pub fn int(n: i64) -> Self {
        Self::literal(Literal::Int(n))
    }

    pub fn bool(b: bool) -> Self {
        Self::literal(Literal::Bool(b))
    }

    pub fn null() -> Self {
        Self::literal(Literal::Null)
    }

    pub fn var(name: Name) -> Self {
        Self::new(ExprKind::VarRef(name), Span::DUMMY)
    }

    pub fn var_decl(name: Name, init: Option<Expr>) -> Self {
        Self::new(
            ExprKind::VarDecl {
                name,
                init: init.map(Box::new),
            },
            Span::DUMMY,
        )
    }

    pub fn assign(name: Name, value: Expr) -> Self {
        Self::new(
            ExprKind::Assign {
                name,
                value: Box::new(value),
            },
            Span::DUMMY,
        )
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            Span::DUMMY,
        )
    }

    pub fn if_else(cond: Expr, then_branch: Expr, else_branch: Option<Expr>) -> Self {
        Self::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
            },
            Span::DUMMY,
        )
    }

    pub fn while_loop(cond: Expr, body: Expr) -> Self {
        Self::new(
            ExprKind::While {
                cond: Box::new(cond),
                body: Box::new(body),
            },
            Span::DUMMY,
        )
    }

    pub fn seq(first: Expr, second: Expr) -> Self {
        let span = first.span.merge(second.span);
        Self::new(
            ExprKind::Seq {
                first: Box::new(first),
                second: Box::new(second),
            },
            span,
        )
    }

    /// Fold a statement list into left-nested `Seq` nodes.
    ///
    /// Returns `None` for an empty list; a single statement is returned as is.
    pub fn seq_list(stmts: impl IntoIterator<Item = Expr>) -> Option<Self> {
        stmts.into_iter().reduce(Expr::seq)
    }

    pub fn func_decl(params: Vec<Name>, body: Expr) -> Self {
        Self::new(
            ExprKind::FuncDecl {
                params,
                body: SharedExpr::new(body),
            },
            Span::DUMMY,
        )
    }

    pub fn func_app(callee: Expr, args: Vec<Expr>) -> Self {
        Self::new(
            ExprKind::FuncApp {
                callee: Box::new(callee),
                args,
            },
            Span::DUMMY,
        )
    }

    pub fn print(expr: Expr) -> Self {
        Self::new(ExprKind::Print(Box::new(expr)), Span::DUMMY)
    }

    /// Deep copy of the tree with every span set to `Span::DUMMY`.
    ///
    /// Lets parsed trees be compared against trees built in code.
    #[must_use]
    pub fn without_spans(&self) -> Expr {
        let strip = |e: &Expr| Box::new(e.without_spans());
        let kind = match &self.kind {
            ExprKind::Literal(lit) => ExprKind::Literal(*lit),
            ExprKind::VarRef(name) => ExprKind::VarRef(*name),
            ExprKind::VarDecl { name, init } => ExprKind::VarDecl {
                name: *name,
                init: init.as_deref().map(strip),
            },
            ExprKind::Assign { name, value } => ExprKind::Assign {
                name: *name,
                value: strip(value),
            },
            ExprKind::Binary { op, left, right } => ExprKind::Binary {
                op: *op,
                left: strip(left),
                right: strip(right),
            },
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => ExprKind::If {
                cond: strip(cond),
                then_branch: strip(then_branch),
                else_branch: else_branch.as_deref().map(strip),
            },
            ExprKind::While { cond, body } => ExprKind::While {
                cond: strip(cond),
                body: strip(body),
            },
            ExprKind::Seq { first, second } => ExprKind::Seq {
                first: strip(first),
                second: strip(second),
            },
            ExprKind::FuncDecl { params, body } => ExprKind::FuncDecl {
                params: params.clone(),
                body: SharedExpr::new(body.without_spans()),
            },
            ExprKind::FuncApp { callee, args } => ExprKind::FuncApp {
                callee: strip(callee),
                args: args.iter().map(Expr::without_spans).collect(),
            },
            ExprKind::Print(inner) => ExprKind::Print(strip(inner)),
        };
        Expr::new(kind, Span::DUMMY)
    }
}
