//! Lexer errors.

use std::fmt;

use fwjs_ir::Span;

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    InvalidCharacter { ch: char },
    /// Integer literal outside the `i64` range.
    IntegerTooLarge,
    /// `/*` without a matching `*/`.
    UnterminatedComment,
    /// Source longer than a span can address.
    SourceTooLarge { len: usize },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { ch } => write!(f, "invalid character `{}`", ch.escape_debug()),
            Self::IntegerTooLarge => write!(f, "integer literal is too large"),
            Self::UnterminatedComment => write!(f, "unterminated block comment"),
            Self::SourceTooLarge { len } => {
                write!(f, "source file is too large ({len} bytes, limit {})", u32::MAX)
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for LexError {}
