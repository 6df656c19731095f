//! Error types and error handling for the parser.
//!
//! This module defines the diagnostics produced while reading, scanning and
//! parsing a source file. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants and the diagnostic kind each one reports as
//! - The error handler that collects diagnostics for a parse
//! - The aborting error returned when a parse fails

pub mod errors;
