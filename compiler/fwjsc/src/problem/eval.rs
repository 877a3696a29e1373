//! Runtime errors (E6xxx).

use fwjs_diagnostic::{Diagnostic, ErrorCode};
use fwjs_eval::{EvalError, EvalErrorKind, TypeError};

/// Render an `EvalError`.
#[cold]
pub fn eval_error(err: &EvalError) -> Diagnostic {
    let (code, label, note) = match &err.kind {
        EvalErrorKind::DuplicateDeclaration { .. } => (
            ErrorCode::E6001,
            "declared again here",
            Some("use `=` to assign to an existing variable"),
        ),
        EvalErrorKind::TypeError(TypeError::InvalidOperands { .. }) => (
            ErrorCode::E6002,
            "operands must both be `int`",
            Some("only `==` accepts operands of any type"),
        ),
        EvalErrorKind::TypeError(TypeError::NonBooleanCondition { .. }) => (
            ErrorCode::E6002,
            "this condition is not a bool",
            Some("conditions are never converted to bool"),
        ),
        EvalErrorKind::DivisionByZero { .. } => (ErrorCode::E6003, "divisor is zero", None),
    };

    let mut diag = Diagnostic::error(code).with_message(err.message.clone());
    if let Some(span) = err.span {
        diag = diag.with_label(span, label);
    }
    if let Some(note) = note {
        diag = diag.with_note(note);
    }
    diag
}
