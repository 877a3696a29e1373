#![deny(clippy::arithmetic_side_effects)]
//! FWJS Eval - tree-walking evaluator for FWJS programs.
//!
//! # Architecture
//!
//! - `Value`: runtime values (int, bool, null, closure)
//! - `Environment`: parent-linked scopes shared by reference; closures hold
//!   a handle to the scope they were declared in
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Interpreter`: one exhaustive `match` over `ExprKind`
//! - `PrintHandler`: where `print` output goes (stdout, buffer, or nowhere)
//!
//! Evaluation is single-threaded. Environments use `Rc<RefCell<_>>` and are
//! not `Send`.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{DeclareError, Environment};
pub use errors::{
    division_by_zero, duplicate_declaration, invalid_operands, non_boolean_condition,
    ConditionSite, EvalError, EvalErrorKind, EvalResult, TypeError,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{ClosureValue, Value};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
