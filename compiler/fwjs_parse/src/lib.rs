//! Recursive descent parser for FWJS.
//!
//! Turns a `TokenList` into a single `Expr`. Statement lists become
//! left-nested `Seq` chains; an empty source has no program at all.
//! The first syntax error aborts parsing.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use fwjs_ir::{Expr, Span, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse statements up to `Eof`.
    pub fn parse_program(mut self) -> Result<Option<Expr>, ParseError> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            stmts.push(self.parse_stat()?);
        }
        tracing::debug!(statements = stmts.len(), "parsed program");
        Ok(Expr::seq_list(stmts))
    }

    /// Span from `start` through the last consumed token.
    fn span_since(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}

/// Parse a whole program.
///
/// Returns `None` for a source with no statements.
pub fn parse(tokens: &TokenList) -> Result<Option<Expr>, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
