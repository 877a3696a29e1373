//! The `explain` command: describe an error code.

use std::process::ExitCode;

use fwjs_diagnostic::ErrorCode;

/// Print the description of `code_str`, e.g. `E6003`.
pub fn explain_error(code_str: &str) -> ExitCode {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E6003");
        return ExitCode::FAILURE;
    };

    let phase = if code.is_lexer_error() {
        "lexer"
    } else if code.is_parser_error() {
        "parser"
    } else {
        "runtime"
    };
    println!("{code} ({phase} error): {}", code.description());
    ExitCode::SUCCESS
}
