use pretty_assertions::assert_eq;

use super::*;

#[test]
fn same_kind_ignores_payload() {
    assert!(TokenKind::Int(1).same_kind(&TokenKind::Int(2)));
    assert!(TokenKind::Ident(Name::from_raw(3)).same_kind(&TokenKind::Ident(Name::EMPTY)));
    assert!(!TokenKind::Int(1).same_kind(&TokenKind::Bool(true)));
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Semicolon.to_string(), "`;`");
    assert_eq!(TokenKind::Int(5).to_string(), "integer");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
}

#[test]
fn token_list_collects() {
    let list: TokenList = [
        Token::new(TokenKind::Int(1), Span::new(0, 1)),
        Token::new(TokenKind::Eof, Span::new(1, 1)),
    ]
    .into_iter()
    .collect();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(format!("{list:?}"), "TokenList(2 tokens)");
    assert_eq!(
        format!("{:?}", list.as_slice()[0]),
        "Int(1) @ 0..1"
    );
}
