//! Statements: `if`, `while`, `print`, blocks and expression statements.

use fwjs_ir::{Expr, TokenKind};
use fwjs_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement.
    pub(crate) fn parse_stat(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_stat_inner())
    }

    fn parse_stat_inner(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Print => self.parse_print(),
            TokenKind::LBrace => self.parse_block(),
            _ => {
                let expr = self.parse_expr()?;
                self.cursor.expect(&TokenKind::Semicolon)?;
                Ok(expr)
            }
        }
    }

    /// `if (cond) { .. } else { .. }`; `else if` chains are accepted.
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_paren_expr()?;
        let then_branch = self.parse_block()?;
        let else_branch = if self.cursor.eat(&TokenKind::Else).is_some() {
            if self.cursor.check(&TokenKind::If) {
                Some(self.parse_stat()?)
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };
        let span = self.span_since(start);
        Ok(Expr::if_else(cond, then_branch, else_branch).with_span(span))
    }

    /// `while (cond) stat`
    fn parse_while(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_paren_expr()?;
        let body = self.parse_stat()?;
        let span = self.span_since(start);
        Ok(Expr::while_loop(cond, body).with_span(span))
    }

    /// `print(expr);`
    fn parse_print(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let value = self.parse_paren_expr()?;
        let span = self.span_since(start);
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(Expr::print(value).with_span(span))
    }

    /// `{ stat* }`; an empty block is a `null` literal.
    pub(crate) fn parse_block(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(&TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_stat()?);
        }
        self.cursor.expect(&TokenKind::RBrace)?;
        let span = self.span_since(start);
        Ok(Expr::seq_list(stmts).unwrap_or_else(|| Expr::null().with_span(span)))
    }

    /// `( expr )`
    fn parse_paren_expr(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(expr)
    }
}
