//! The `run` command: lex, parse and evaluate a source file.

use std::process::ExitCode;

use fwjs_eval::stdout_handler;

use super::{read_file, report};
use crate::{run_source, RunOptions};

/// Run a source file with `print` going to stdout.
pub fn run_file(path: &str, options: &RunOptions) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };

    tracing::debug!(path, bytes = source.len(), "running file");
    match run_source(&source, stdout_handler()) {
        Ok(value) => {
            if options.print_result {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Err(diag) => report(&diag, path, &source, options.color),
    }
}
