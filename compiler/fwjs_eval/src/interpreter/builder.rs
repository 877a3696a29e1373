//! `InterpreterBuilder` for configuring `Interpreter` instances.

use fwjs_ir::StringInterner;

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// The interner is required so runtime errors and traces can name
/// variables; everything else has a default.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            print_handler: None,
        }
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
        }
    }
}
