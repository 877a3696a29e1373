//! FWJS driver.
//!
//! ```text
//! source ──► lex() ──► TokenList ──► parse() ──► Option<Expr>
//!                                                      │
//!                                                      ▼
//!                                   Interpreter::run() ──► Value
//! ```
//!
//! Every stage reports its first error as a `Diagnostic`; the commands render
//! it with a `TerminalEmitter`.

pub mod commands;
pub mod problem;
mod tracing_setup;

pub use fwjs_diagnostic::emitter::ColorMode;
pub use fwjs_diagnostic::{Diagnostic, ErrorCode};
pub use fwjs_eval::{buffer_handler, silent_handler, stdout_handler, SharedPrintHandler, Value};
pub use tracing_setup::init_tracing;

use fwjs_eval::InterpreterBuilder;
use fwjs_ir::{Expr, StringInterner, TokenList};

/// Options for `fwjs run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub color: ColorMode,
    /// Print the program's final value after it finishes.
    pub print_result: bool,
}

impl RunOptions {
    /// Parse the flags that follow the file path.
    pub fn from_flags<S: AsRef<str>>(flags: &[S]) -> Result<Self, String> {
        let mut options = RunOptions::default();
        for flag in flags {
            let flag = flag.as_ref();
            if let Some(mode) = flag.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(mode).ok_or_else(|| {
                    format!("invalid color mode '{mode}' (expected auto, always or never)")
                })?;
            } else if flag == "--print-result" {
                options.print_result = true;
            } else {
                return Err(format!("unknown option '{flag}'"));
            }
        }
        Ok(options)
    }
}

/// Tokenize `source`.
pub fn lex_source(source: &str, interner: &StringInterner) -> Result<TokenList, Diagnostic> {
    fwjs_lexer::lex(source, interner).map_err(|err| problem::lex_error(&err))
}

/// Tokenize and parse `source`. `None` means the source has no statements.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<Option<Expr>, Diagnostic> {
    let tokens = lex_source(source, interner)?;
    fwjs_parse::parse(&tokens).map_err(|err| err.to_diagnostic())
}

/// Lex, parse and evaluate `source` in a fresh environment.
///
/// `print` output goes to `handler`. Output written before an error stays
/// written.
pub fn run_source(source: &str, handler: SharedPrintHandler) -> Result<Value, Diagnostic> {
    let interner = StringInterner::new();
    let program = parse_source(source, &interner)?;
    let mut interpreter = InterpreterBuilder::new(&interner)
        .print_handler(handler)
        .build();
    interpreter
        .run(program.as_ref())
        .map_err(|err| problem::eval_error(&err))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
