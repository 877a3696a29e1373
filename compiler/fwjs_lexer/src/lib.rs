//! Lexer for FWJS using logos with string interning.
//!
//! `lex` turns source text into a `TokenList` ending in `Eof`. Whitespace
//! and comments are dropped; identifiers are interned. The first invalid
//! input stops lexing with a `LexError`.

mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use fwjs_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("function")]
    Function,
    #[token("var")]
    Var,
    #[token("print")]
    Print,
    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("%")]
    Percent,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token("<=")]
    LtEq,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Consume the rest of a block comment; fails when `*/` never appears.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end.saturating_add(2));
            true
        }
        None => false,
    }
}

/// Lex `source` into tokens, interning identifiers.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let eof = u32::try_from(source.len()).map_err(|_| {
        LexError::new(
            LexErrorKind::SourceTooLarge { len: source.len() },
            Span::DUMMY,
        )
    })?;

    let mut tokens = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        // cannot fail: every offset is at most `eof`
        let span = Span::try_from_range(logos.span()).unwrap_or(Span::point(eof));
        let slice = logos.slice();

        match result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(raw) => tokens.push(Token::new(convert_token(raw, slice, interner), span)),
            Err(()) => {
                let error = LexError::new(classify_error(slice), span);
                tracing::debug!(%error, %span, "lex error");
                return Err(error);
            }
        }
    }

    tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
    tracing::debug!(tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),
        RawToken::Null => TokenKind::Null,
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Function => TokenKind::Function,
        RawToken::Var => TokenKind::Var,
        RawToken::Print => TokenKind::Print,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,

        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,

        // trivia is filtered out before conversion
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Eof,
    }
}

/// Work out why logos rejected `slice`.
fn classify_error(slice: &str) -> LexErrorKind {
    if slice.starts_with("/*") {
        LexErrorKind::UnterminatedComment
    } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
        LexErrorKind::IntegerTooLarge
    } else {
        LexErrorKind::InvalidCharacter {
            ch: slice.chars().next().unwrap_or('\0'),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
