//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a `Program`. There is one function per grammar
//! rule, each consuming tokens through the parser's single lookahead:
//!
//! - Declaration parsing (classes, fields, methods, formals)
//! - Statement parsing (control flow, blocks, declarations)
//! - Expression parsing through a layered precedence chain
//!
//! The first unmet expectation aborts the whole parse; no recovery is
//! attempted.

pub mod decl;
pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
