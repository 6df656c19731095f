//! Lexical analysis module.
//!
//! This module supplies the tokens the parser consumes:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//! - The pull-based [`scanner::TokenSource`] seam the parser reads through

pub mod lexer;
pub mod scanner;
pub mod tokens;
