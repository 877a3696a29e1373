//! Destinations for `print` output.
//!
//! `print` always writes whole lines. The handler is chosen when the
//! interpreter is built:
//! - stdout (default, used by the `fwjs` binary)
//! - an in-memory buffer (tests and embedding)
//! - silent (discard)
//!
//! Enum dispatch keeps the per-print cost to a single match.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes lines to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}") {
            tracing::warn!(%err, "failed to write program output");
        }
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything printed so far, each line terminated by `\n`.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Output sink used by `print`.
#[derive(Debug)]
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `line` followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between the interpreter and whoever reads the output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
