use fwjs_diagnostic::ErrorCode;
use fwjs_ir::{BinaryOp, Expr, ExprKind, Name, Span, StringInterner, TokenKind};
use fwjs_lexer::lex;
use pretty_assertions::assert_eq;

use super::{parse, ParseError, ParseErrorKind};

struct Fixture {
    interner: StringInterner,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
        }
    }

    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn try_parse(&self, source: &str) -> Result<Option<Expr>, ParseError> {
        let tokens = lex(source, &self.interner).unwrap();
        parse(&tokens)
    }

    fn parse(&self, source: &str) -> Expr {
        self.try_parse(source).unwrap().unwrap()
    }

    /// Parse and drop spans, for comparing against trees built in code.
    fn tree(&self, source: &str) -> Expr {
        self.parse(source).without_spans()
    }

    fn error(&self, source: &str) -> ParseError {
        self.try_parse(source).unwrap_err()
    }
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

#[test]
fn empty_program() {
    let f = Fixture::new();
    assert_eq!(f.try_parse("").unwrap(), None);
    assert_eq!(f.try_parse("  // just a comment\n").unwrap(), None);
}

#[test]
fn literals() {
    let f = Fixture::new();
    assert_eq!(f.tree("42;"), Expr::int(42));
    assert_eq!(f.tree("true;"), Expr::bool(true));
    assert_eq!(f.tree("null;"), Expr::null());
    assert_eq!(f.tree("x;"), Expr::var(f.name("x")));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("1 + 2 * 3;"),
        bin(
            BinaryOp::Add,
            Expr::int(1),
            bin(BinaryOp::Mul, Expr::int(2), Expr::int(3))
        )
    );
}

#[test]
fn comparison_binds_loosest() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("1 + 2 >= 3 % 2;"),
        bin(
            BinaryOp::GtEq,
            bin(BinaryOp::Add, Expr::int(1), Expr::int(2)),
            bin(BinaryOp::Mod, Expr::int(3), Expr::int(2))
        )
    );
}

#[test]
fn binary_operators_are_left_associative() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("10 - 3 - 2;"),
        bin(
            BinaryOp::Sub,
            bin(BinaryOp::Sub, Expr::int(10), Expr::int(3)),
            Expr::int(2)
        )
    );
    assert_eq!(
        f.tree("8 / 4 / 2;"),
        bin(
            BinaryOp::Div,
            bin(BinaryOp::Div, Expr::int(8), Expr::int(4)),
            Expr::int(2)
        )
    );
}

#[test]
fn parentheses_override_precedence() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("(1 + 2) * 3;"),
        bin(
            BinaryOp::Mul,
            bin(BinaryOp::Add, Expr::int(1), Expr::int(2)),
            Expr::int(3)
        )
    );
}

#[test]
fn assignment_is_right_associative() {
    let f = Fixture::new();
    let (a, b) = (f.name("a"), f.name("b"));
    assert_eq!(
        f.tree("a = b = 1;"),
        Expr::assign(a, Expr::assign(b, Expr::int(1)))
    );
}

#[test]
fn assignment_takes_the_whole_right_side() {
    let f = Fixture::new();
    let x = f.name("x");
    assert_eq!(
        f.tree("x = 1 + 2 < 4;"),
        Expr::assign(
            x,
            bin(
                BinaryOp::Lt,
                bin(BinaryOp::Add, Expr::int(1), Expr::int(2)),
                Expr::int(4)
            )
        )
    );
}

#[test]
fn var_declarations() {
    let f = Fixture::new();
    let x = f.name("x");
    assert_eq!(f.tree("var x;"), Expr::var_decl(x, None));
    assert_eq!(
        f.tree("var x = 1 + 1;"),
        Expr::var_decl(x, Some(bin(BinaryOp::Add, Expr::int(1), Expr::int(1))))
    );
}

#[test]
fn statements_fold_left() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("1; 2; 3;"),
        Expr::seq(Expr::seq(Expr::int(1), Expr::int(2)), Expr::int(3))
    );
}

#[test]
fn empty_block_is_null() {
    let f = Fixture::new();
    let expr = f.parse("{}");
    assert_eq!(expr.without_spans(), Expr::null());
    assert_eq!(expr.span, Span::new(0, 2));
}

#[test]
fn block_with_one_statement_is_that_statement() {
    let f = Fixture::new();
    assert_eq!(f.tree("{ 7; }"), Expr::int(7));
}

#[test]
fn if_without_else() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("if (true) { 1; }"),
        Expr::if_else(Expr::bool(true), Expr::int(1), None)
    );
}

#[test]
fn if_with_else_and_else_if() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("if (true) { 1; } else { 2; }"),
        Expr::if_else(Expr::bool(true), Expr::int(1), Some(Expr::int(2)))
    );
    assert_eq!(
        f.tree("if (false) { 1; } else if (true) { 2; } else {}"),
        Expr::if_else(
            Expr::bool(false),
            Expr::int(1),
            Some(Expr::if_else(
                Expr::bool(true),
                Expr::int(2),
                Some(Expr::null())
            ))
        )
    );
}

#[test]
fn while_body_may_be_single_statement() {
    let f = Fixture::new();
    let x = f.name("x");
    assert_eq!(
        f.tree("while (x < 3) x = x + 1;"),
        Expr::while_loop(
            bin(BinaryOp::Lt, Expr::var(x), Expr::int(3)),
            Expr::assign(x, bin(BinaryOp::Add, Expr::var(x), Expr::int(1)))
        )
    );
}

#[test]
fn print_statement() {
    let f = Fixture::new();
    let expr = f.parse("print(1 == 1);");
    assert_eq!(
        expr.without_spans(),
        Expr::print(bin(BinaryOp::Eq, Expr::int(1), Expr::int(1)))
    );
    assert_eq!(expr.span, Span::new(0, 13));
}

#[test]
fn function_declaration_and_calls() {
    let f = Fixture::new();
    let (a, b, g) = (f.name("a"), f.name("b"), f.name("g"));
    assert_eq!(
        f.tree("var g = function(a, b) { a + b; };"),
        Expr::var_decl(
            g,
            Some(Expr::func_decl(
                vec![a, b],
                bin(BinaryOp::Add, Expr::var(a), Expr::var(b))
            ))
        )
    );
    assert_eq!(
        f.tree("g(1)(2, 3);"),
        Expr::func_app(
            Expr::func_app(Expr::var(g), vec![Expr::int(1)]),
            vec![Expr::int(2), Expr::int(3)]
        )
    );
    assert_eq!(f.tree("g();"), Expr::func_app(Expr::var(g), vec![]));
}

#[test]
fn function_with_empty_body() {
    let f = Fixture::new();
    assert_eq!(
        f.tree("function() {};"),
        Expr::func_decl(vec![], Expr::null())
    );
}

#[test]
fn spans_cover_source() {
    let f = Fixture::new();
    let expr = f.parse("var x = 10;");
    assert_eq!(expr.span, Span::new(0, 10));
    let ExprKind::VarDecl { init: Some(init), .. } = &expr.kind else {
        panic!("expected declaration, got {expr:?}");
    };
    assert_eq!(init.span, Span::new(8, 10));

    let call = f.parse("g(1, 2);");
    assert_eq!(call.span, Span::new(0, 7));
}

#[test]
fn missing_semicolon() {
    let f = Fixture::new();
    let err = f.error("1 + 2 print(3);");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`;`",
            found: TokenKind::Print,
        }
    );
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.to_string(), "expected `;`, found `print`");
}

#[test]
fn missing_operand() {
    let f = Fixture::new();
    let err = f.error("1 + ;");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Semicolon
        }
    );
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn unexpected_end_of_file() {
    let f = Fixture::new();
    let err = f.error("while (true) {");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof { expected: "`}`" });
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.span, Span::point(14));
}

#[test]
fn var_needs_identifier() {
    let f = Fixture::new();
    let err = f.error("var 3 = 4;");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedIdentifier {
            found: TokenKind::Int(3)
        }
    );
    assert_eq!(err.code(), ErrorCode::E1004);
}

#[test]
fn if_requires_block() {
    let f = Fixture::new();
    let err = f.error("if (true) print(1);");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`{`",
            found: TokenKind::Print,
        }
    );
}

#[test]
fn diagnostic_carries_code_and_label() {
    let f = Fixture::new();
    let diag = f.error("var = 1;").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
}

#[test]
fn deeply_nested_parentheses() {
    let f = Fixture::new();
    let depth = 2_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(f.tree(&source), Expr::int(1));
}
