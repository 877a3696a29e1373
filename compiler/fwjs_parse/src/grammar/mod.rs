//! Grammar productions, one `impl Parser` block per file.

mod expr;
mod stmt;
