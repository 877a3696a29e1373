//! Expressions, lowest precedence first:
//! assignment and `var`, comparisons, `+ -`, `* / %`, calls, primaries.
//! Binary levels are left-associative; assignment is right-associative.

use fwjs_ir::{BinaryOp, Expr, Name, Span, TokenKind};
use fwjs_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

fn comparison_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::EqEq => Some(BinaryOp::Eq),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        match (self.cursor.current_kind(), self.cursor.peek(1).kind) {
            (TokenKind::Ident(name), TokenKind::Eq) => {
                let start = self.cursor.advance().span;
                self.cursor.advance();
                let value = self.parse_expr()?;
                let span = start.merge(value.span);
                Ok(Expr::assign(name, value).with_span(span))
            }
            (TokenKind::Var, _) => self.parse_var_decl(),
            _ => self.parse_comparison(),
        }
    }

    /// `var name` or `var name = expr`
    fn parse_var_decl(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.expect_ident()?;
        let init = if self.cursor.eat(&TokenKind::Eq).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let span = self.span_since(start);
        Ok(Expr::var_decl(name, init).with_span(span))
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_additive, comparison_op)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_term, additive_op)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_call, multiplicative_op)
    }

    /// `operand (op operand)*`, folded to the left.
    fn parse_binary_level(
        &mut self,
        operand: for<'p> fn(&'p mut Parser<'a>) -> Result<Expr, ParseError>,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = operand(self)?;
            let span = left.span.merge(right.span);
            left = Expr::binary(op, left, right).with_span(span);
        }
        Ok(left)
    }

    /// `primary ( '(' args ')' )*`
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut callee = self.parse_primary()?;
        while self.cursor.eat(&TokenKind::LParen).is_some() {
            let mut args = Vec::new();
            if !self.cursor.check(&TokenKind::RParen) {
                loop {
                    args.push(self.parse_expr()?);
                    if self.cursor.eat(&TokenKind::Comma).is_none() {
                        break;
                    }
                }
            }
            self.cursor.expect(&TokenKind::RParen)?;
            let span = self.span_since(callee.span);
            callee = Expr::func_app(callee, args).with_span(span);
        }
        Ok(callee)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let expr = match token.kind {
            TokenKind::Int(n) => Expr::int(n),
            TokenKind::Bool(b) => Expr::bool(b),
            TokenKind::Null => Expr::null(),
            TokenKind::Ident(name) => Expr::var(name),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                return Ok(inner);
            }
            TokenKind::Function => return self.parse_function(),
            _ => return Err(ParseError::expected_expression(token)),
        };
        self.cursor.advance();
        Ok(expr.with_span(token.span))
    }

    /// `function(a, b) { .. }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        self.cursor.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                params.push(self.expect_ident()?.0);
                if self.cursor.eat(&TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        let span = self.span_since(start);
        Ok(Expr::func_decl(params, body).with_span(span))
    }

    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok((name, token.span))
            }
            _ => Err(ParseError::expected_identifier(token)),
        }
    }
}
