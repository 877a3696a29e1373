use fwjs_ir::{Span, StringInterner, TokenKind};
use pretty_assertions::assert_eq;

use super::{lex, LexErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner)
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn error(source: &str) -> (LexErrorKind, Span) {
    let interner = StringInterner::new();
    let err = lex(source, &interner).unwrap_err();
    (err.kind, err.span)
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t // nothing\n /* at all */"), vec![TokenKind::Eof]);
}

#[test]
fn keywords_and_literals() {
    assert_eq!(
        kinds("if else while function var print null true false 42"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Function,
            TokenKind::Var,
            TokenKind::Print,
            TokenKind::Null,
            TokenKind::Bool(true),
            TokenKind::Bool(false),
            TokenKind::Int(42),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operators_take_longest_match() {
    assert_eq!(
        kinds("= == < <= > >= + - * / %"),
        vec![
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifiers_are_interned() {
    let interner = StringInterner::new();
    let tokens = lex("foo _bar9 foo iffy", &interner).unwrap();
    let foo = interner.intern("foo");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds[0], TokenKind::Ident(foo));
    assert_eq!(kinds[2], TokenKind::Ident(foo));
    assert_eq!(kinds[1], TokenKind::Ident(interner.intern("_bar9")));
    // keyword prefix does not split an identifier
    assert_eq!(kinds[3], TokenKind::Ident(interner.intern("iffy")));
}

#[test]
fn spans_are_byte_ranges() {
    let interner = StringInterner::new();
    let tokens = lex("var x = 10;", &interner).unwrap();
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(4, 5),
            Span::new(6, 7),
            Span::new(8, 10),
            Span::new(10, 11),
            Span::new(11, 11),
        ]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("1 // two\n/* three\n * still */ 4"),
        vec![TokenKind::Int(1), TokenKind::Int(4), TokenKind::Eof]
    );
}

#[test]
fn invalid_character() {
    assert_eq!(
        error("var x = 1 # 2;"),
        (LexErrorKind::InvalidCharacter { ch: '#' }, Span::new(10, 11))
    );
}

#[test]
fn integer_too_large() {
    let (kind, span) = error("99999999999999999999");
    assert_eq!(kind, LexErrorKind::IntegerTooLarge);
    assert_eq!(span, Span::new(0, 20));
    assert_eq!(kinds("9223372036854775807")[0], TokenKind::Int(i64::MAX));
}

#[test]
fn unterminated_block_comment() {
    let (kind, span) = error("1 /* open");
    assert_eq!(kind, LexErrorKind::UnterminatedComment);
    assert_eq!(span.start, 2);
}

#[test]
fn error_messages() {
    assert_eq!(
        LexErrorKind::InvalidCharacter { ch: '@' }.to_string(),
        "invalid character `@`"
    );
    assert_eq!(
        LexErrorKind::IntegerTooLarge.to_string(),
        "integer literal is too large"
    );
}
