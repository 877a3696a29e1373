//! Token cursor for navigating the token stream.

use fwjs_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a token list.
///
/// The last token is always `Eof`; the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Span of the most recently consumed token.
    prev: Span,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
            prev: Span::DUMMY,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.peek(0)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Token `n` places ahead; `Eof` beyond the end.
    pub fn peek(&self, n: usize) -> Token {
        match self.tokens.get(self.pos.saturating_add(n)) {
            Some(token) => *token,
            None => self.eof(),
        }
    }

    fn eof(&self) -> Token {
        let end = self.tokens.last().map_or(0, |t| t.span.end);
        Token::new(TokenKind::Eof, Span::point(end))
    }

    /// Span of the last consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.prev
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the current token is the same variant as `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos = self.pos.saturating_add(1);
        }
        self.prev = token.span;
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of variant `kind` or fail with `expected`.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        self.eat(kind)
            .ok_or_else(|| ParseError::unexpected(self.current(), kind.display_name()))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
