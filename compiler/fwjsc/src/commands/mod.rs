//! Command handlers for the `fwjs` binary.
//!
//! Each handler returns the process exit status. Shared helpers live here.

use std::io::IsTerminal;
use std::process::ExitCode;

use fwjs_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use fwjs_diagnostic::Diagnostic;

mod debug;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_file;

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("cannot read '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            None
        }
    }
}

/// Render `diag` against `source` on stderr and return a failing status.
pub(crate) fn report(diag: &Diagnostic, path: &str, source: &str, color: ColorMode) -> ExitCode {
    tracing::debug!(
        code = %diag.code,
        span = ?diag.primary_span(),
        path,
        "reporting diagnostic"
    );
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty).with_source(path, source);
    emitter.emit(diag);
    emitter.emit_summary(1);
    emitter.flush();
    ExitCode::FAILURE
}
