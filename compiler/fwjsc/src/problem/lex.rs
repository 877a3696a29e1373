//! Lexer errors (E0xxx).

use fwjs_diagnostic::{Diagnostic, ErrorCode};
use fwjs_lexer::{LexError, LexErrorKind};

/// Render a `LexError`.
#[cold]
pub fn lex_error(err: &LexError) -> Diagnostic {
    let message = err.to_string();
    match &err.kind {
        LexErrorKind::InvalidCharacter { .. } => Diagnostic::error(ErrorCode::E0001)
            .with_message(message)
            .with_label(err.span, "not valid in FWJS source"),
        LexErrorKind::IntegerTooLarge => Diagnostic::error(ErrorCode::E0002)
            .with_message(message)
            .with_label(err.span, "does not fit in 64 bits")
            .with_note(format!("the largest integer literal is {}", i64::MAX)),
        LexErrorKind::UnterminatedComment => Diagnostic::error(ErrorCode::E0003)
            .with_message(message)
            .with_label(err.span, "comment starts here")
            .with_suggestion("close the comment with `*/`"),
        LexErrorKind::SourceTooLarge { .. } => {
            Diagnostic::error(ErrorCode::E0004).with_message(message)
        }
    }
}
