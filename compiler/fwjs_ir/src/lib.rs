//! FWJS IR - syntax tree types shared by the parser and the evaluator.
//!
//! This crate contains:
//! - `Span` for source locations
//! - `Name` and `StringInterner` for interned identifiers
//! - `Token`, `TokenKind` and `TokenList` produced by the lexer
//! - The expression tree (`Expr`, `ExprKind`, `BinaryOp`, `Literal`)
//!
//! # Design
//!
//! - **Intern identifiers**: variable and parameter names are `Name(u32)`,
//!   so scope lookups hash a `u32` instead of a string.
//! - **One tagged tree**: every node is an `ExprKind` variant, evaluated by a
//!   single exhaustive match.
//! - **Shared function bodies**: `FuncDecl` bodies are `SharedExpr` so a
//!   closure can hold its body without copying the tree.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Literal, SharedExpr};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
