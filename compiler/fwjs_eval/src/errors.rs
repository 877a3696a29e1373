//! Runtime errors.
//!
//! `EvalErrorKind` is the structured category used for diagnostic
//! conversion. Factory functions (`division_by_zero(op)` and friends) are the
//! public way to build errors; they fill in both `kind` and `message`.

use std::fmt;

use fwjs_ir::{BinaryOp, Span};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Construct whose condition was not a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionSite {
    If,
    While,
}

impl fmt::Display for ConditionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConditionSite::If => "if",
            ConditionSite::While => "while",
        })
    }
}

/// A value of the wrong variant reached an operator or a condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// Arithmetic or ordering operator applied to a non-integer.
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    /// `if` or `while` condition that is not a boolean.
    NonBooleanCondition {
        site: ConditionSite,
        got: &'static str,
    },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::InvalidOperands { op, left, right } => write!(
                f,
                "operator `{}` cannot be applied to `{left}` and `{right}`",
                op.as_symbol()
            ),
            TypeError::NonBooleanCondition { site, got } => {
                write!(f, "`{site}` condition must be a bool, found `{got}`")
            }
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    DuplicateDeclaration { name: String },
    TypeError(TypeError),
    DivisionByZero { op: BinaryOp },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDeclaration { name } => {
                write!(f, "variable `{name}` is already declared in this scope")
            }
            Self::TypeError(err) => write!(f, "type error: {err}"),
            Self::DivisionByZero { op: BinaryOp::Mod } => write!(f, "modulo by zero"),
            Self::DivisionByZero { .. } => write!(f, "division by zero"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered message; equals `kind.to_string()`.
    pub message: String,
    /// Span of the node that failed.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// `var` redeclared in the same scope.
#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}

/// Operator applied to operands it does not accept.
#[cold]
pub fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError(TypeError::InvalidOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }))
}

/// Condition of an `if` or `while` that is not a boolean.
#[cold]
pub fn non_boolean_condition(site: ConditionSite, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError(TypeError::NonBooleanCondition {
        site,
        got: got.type_name(),
    }))
}

/// `/` or `%` with a zero right operand.
#[cold]
pub fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero { op })
}
