//! Conversion of lexer and runtime errors into diagnostics.
//!
//! Parse errors carry their own `ParseError::to_diagnostic`; the lexer and
//! the evaluator know nothing about diagnostics, so their errors are rendered
//! here.

mod eval;
mod lex;

pub use eval::eval_error;
pub use lex::lex_error;
