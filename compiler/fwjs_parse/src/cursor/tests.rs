use fwjs_ir::{Span, StringInterner, TokenKind, TokenList};
use fwjs_lexer::lex;
use pretty_assertions::assert_eq;

use super::Cursor;
use crate::ParseErrorKind;

fn tokens(source: &str) -> TokenList {
    let interner = StringInterner::new();
    lex(source, &interner).unwrap()
}

#[test]
fn advance_stops_at_eof() {
    let list = tokens("x;");
    let mut cursor = Cursor::new(&list);
    assert!(matches!(cursor.advance().kind, TokenKind::Ident(_)));
    assert_eq!(cursor.advance().kind, TokenKind::Semicolon);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn peek_past_end_is_eof() {
    let list = tokens("a");
    let cursor = Cursor::new(&list);
    assert_eq!(cursor.peek(1).kind, TokenKind::Eof);
    let far = cursor.peek(10);
    assert_eq!(far.kind, TokenKind::Eof);
    assert_eq!(far.span, Span::point(1));
}

#[test]
fn check_ignores_payload() {
    let list = tokens("42");
    let cursor = Cursor::new(&list);
    assert!(cursor.check(&TokenKind::Int(0)));
    assert!(!cursor.check(&TokenKind::Bool(true)));
}

#[test]
fn eat_only_consumes_matching_token() {
    let list = tokens("( )");
    let mut cursor = Cursor::new(&list);
    assert!(cursor.eat(&TokenKind::RParen).is_none());
    assert_eq!(cursor.position(), 0);
    assert!(cursor.eat(&TokenKind::LParen).is_some());
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
    assert_eq!(cursor.current().span, Span::new(2, 3));
}

#[test]
fn expect_reports_found_token() {
    let list = tokens("print");
    let mut cursor = Cursor::new(&list);
    let err = cursor.expect(&TokenKind::LBrace).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`{`",
            found: TokenKind::Print,
        }
    );
    assert_eq!(err.span, Span::new(0, 5));
}

#[test]
fn expect_at_end_is_unexpected_eof() {
    let list = tokens("");
    let mut cursor = Cursor::new(&list);
    let err = cursor.expect(&TokenKind::Semicolon).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof { expected: "`;`" });
}
