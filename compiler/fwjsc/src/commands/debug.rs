//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::process::ExitCode;

use fwjs_diagnostic::emitter::ColorMode;
use fwjs_ir::{StringInterner, TokenKind};

use super::{read_file, report};
use crate::{lex_source, parse_source};

/// Parse a file and pretty-print its tree.
pub fn parse_file(path: &str) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    let interner = StringInterner::new();

    match parse_source(&source, &interner) {
        Ok(Some(program)) => {
            println!("{program:#?}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("'{path}' contains no statements");
            ExitCode::SUCCESS
        }
        Err(diag) => report(&diag, path, &source, ColorMode::Auto),
    }
}

/// Lex a file and print one token per line.
pub fn lex_file(path: &str) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    let interner = StringInterner::new();

    match lex_source(&source, &interner) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for tok in &tokens {
                match tok.kind {
                    TokenKind::Ident(name) => {
                        println!("  Ident({}) @ {}", interner.lookup(name), tok.span);
                    }
                    kind => println!("  {kind:?} @ {}", tok.span),
                }
            }
            ExitCode::SUCCESS
        }
        Err(diag) => report(&diag, path, &source, ColorMode::Auto),
    }
}
