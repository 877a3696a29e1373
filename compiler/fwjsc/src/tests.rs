use pretty_assertions::assert_eq;

use super::{parse_source, run_source, silent_handler, ColorMode, ErrorCode, RunOptions, Value};
use fwjs_ir::StringInterner;

#[test]
fn run_options_default() {
    let options = RunOptions::from_flags::<&str>(&[]).unwrap();
    assert_eq!(options, RunOptions::default());
    assert_eq!(options.color, ColorMode::Auto);
    assert!(!options.print_result);
}

#[test]
fn run_options_flags() {
    let options = RunOptions::from_flags(&["--print-result", "--color=never"]).unwrap();
    assert_eq!(
        options,
        RunOptions {
            color: ColorMode::Never,
            print_result: true,
        }
    );
}

#[test]
fn run_options_reject_unknown() {
    assert!(RunOptions::from_flags(&["--colour=never"]).is_err());
    assert!(RunOptions::from_flags(&["--color=sometimes"]).is_err());
}

#[test]
fn empty_source_runs_to_null() {
    assert_eq!(run_source("", silent_handler()).unwrap(), Value::Null);
}

#[test]
fn parse_source_reports_lex_errors_first() {
    let interner = StringInterner::new();
    let diag = parse_source("var x = $;", &interner).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E0001);
}

#[test]
fn run_source_reports_parse_errors() {
    let diag = run_source("print(1)", silent_handler()).unwrap_err();
    assert_eq!(diag.code, ErrorCode::E1003);
}
