//! Parse errors.

use std::fmt;

use fwjs_diagnostic::{Diagnostic, ErrorCode};
use fwjs_ir::{Span, Token, TokenKind};

/// A syntax error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    ExpectedExpression {
        found: TokenKind,
    },
    UnexpectedEof {
        expected: &'static str,
    },
    ExpectedIdentifier {
        found: TokenKind,
    },
}

impl ParseError {
    /// `found` where `expected` was required.
    #[cold]
    pub fn unexpected(found: Token, expected: &'static str) -> Self {
        let kind = if found.kind == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind,
            }
        };
        ParseError {
            kind,
            span: found.span,
        }
    }

    #[cold]
    pub fn expected_expression(found: Token) -> Self {
        if found.kind == TokenKind::Eof {
            return Self::unexpected(found, "expression");
        }
        ParseError {
            kind: ParseErrorKind::ExpectedExpression { found: found.kind },
            span: found.span,
        }
    }

    #[cold]
    pub fn expected_identifier(found: Token) -> Self {
        if found.kind == TokenKind::Eof {
            return Self::unexpected(found, "identifier");
        }
        ParseError {
            kind: ParseErrorKind::ExpectedIdentifier { found: found.kind },
            span: found.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
        }
    }

    /// Short text for the label under the offending token.
    fn label(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEof { expected } => format!("expected {expected}"),
            ParseErrorKind::ExpectedExpression { .. } => "expected expression".to_string(),
            ParseErrorKind::ExpectedIdentifier { .. } => "expected identifier".to_string(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, self.label())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected expression, found {found}")
            }
            ParseErrorKind::UnexpectedEof { expected } => {
                write!(f, "unexpected end of file, expected {expected}")
            }
            ParseErrorKind::ExpectedIdentifier { found } => {
                write!(f, "expected identifier, found {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
