use fwjs_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("division by zero")
        .with_label(Span::new(4, 9), "divisor is zero")
        .with_label(Span::new(0, 3), "declared here")
        .with_note("integer division requires a non-zero divisor")
        .with_suggestion("check the divisor first");

    assert_eq!(diag.primary_span(), Some(Span::new(4, 9)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.to_string(), "error[E6003]: division by zero");
}

#[test]
fn default_message_is_code_description() {
    let diag = Diagnostic::error(ErrorCode::E1003);
    assert_eq!(diag.message, "unexpected end of file");
    assert_eq!(diag.primary_span(), None);
}
