//! Diagnostic system for error reporting.
//!
//! Every error the toolchain can report is turned into a `Diagnostic`:
//! - an `ErrorCode` for searchability
//! - a message saying what went wrong
//! - labels saying where, the first one marking the error itself
//! - optional notes and help lines
//!
//! Emitters render diagnostics; `TerminalEmitter` writes the human-readable
//! form with source snippets.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCode, UnknownErrorCode};
