//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser holds exactly one lookahead token, pulled on demand from a
//! [`TokenSource`], and reports the first grammar violation to the
//! [`ErrorHandler`] it was given.

use std::{fs, mem, rc::Rc};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{CompilationError, Error, ErrorHandler, ErrorImpl},
    lexer::{
        scanner::{Scanner, TokenSource},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::decl::parse_program;

/// The main parser structure that maintains parsing state.
pub struct Parser<'h, S: TokenSource> {
    /// Supplies tokens on demand
    scanner: S,
    /// The lookahead token
    current_token: Token,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Collects the diagnostic of an aborted parse
    handler: &'h mut ErrorHandler,
}

impl<'h, S: TokenSource> Parser<'h, S> {
    /// Creates a parser and primes its lookahead token.
    pub fn new(mut scanner: S, file: Rc<String>, handler: &'h mut ErrorHandler) -> Self {
        let current_token = scanner.next();

        Parser {
            scanner,
            current_token,
            file,
            handler,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.scanner.next();
        mem::replace(&mut self.current_token, next)
    }

    /// Consumes a token of the expected kind, or fails with `error`.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(error));
        }

        Ok(self.advance())
    }

    /// Consumes a token of the expected kind, naming the kind in the error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let error = ErrorImpl::ExpectedToken {
            expected: expected_kind.describe().to_string(),
            found: self.current_token.to_string(),
        };
        self.expect_error(expected_kind, error)
    }

    /// Consumes a token of the expected kind, reporting it as missing from
    /// `construct` otherwise.
    pub fn expect_in(&mut self, expected_kind: TokenKind, construct: &str) -> Result<Token, Error> {
        let error = ErrorImpl::MissingToken {
            construct: construct.to_string(),
            token: expected_kind.describe().to_string(),
        };
        self.expect_error(expected_kind, error)
    }

    /// Consumes an identifier and returns its spelling.
    pub fn expect_identifier(&mut self) -> Result<String, Error> {
        Ok(self.expect(TokenKind::Identifier)?.value)
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// Builds an `ExpectedToken` error for the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        self.error(ErrorImpl::ExpectedToken {
            expected: expected.to_string(),
            found: self.current_token.to_string(),
        })
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Parses the whole token stream into a `Program`.
    ///
    /// On the first grammar violation a single diagnostic is registered with
    /// the handler and the parse is abandoned.
    pub fn parse(mut self) -> Result<Program, CompilationError> {
        debug!(file = %self.file, "parsing");

        match parse_program(&mut self) {
            Ok(program) => {
                debug!(file = %self.file, classes = program.classes.len(), "parsed");
                Ok(program)
            }
            Err(error) => {
                debug!(file = %self.file, %error, "parse aborted");
                Err(abort(self.handler, error))
            }
        }
    }
}

fn abort(handler: &mut ErrorHandler, error: Error) -> CompilationError {
    handler.register(error);
    CompilationError::new(handler)
}

/// Reads `file` from disk and parses it.
pub fn parse(file: &str, handler: &mut ErrorHandler) -> Result<Program, CompilationError> {
    match fs::read_to_string(file) {
        Ok(source) => parse_source(&source, file, handler),
        Err(reason) => {
            let error = Error::new(
                ErrorImpl::FileReadError {
                    file: file.to_string(),
                    reason: reason.to_string(),
                },
                Position(0, Rc::new(file.to_string())),
            );
            Err(abort(handler, error))
        }
    }
}

/// Parses `source`, attributing positions to `file`.
pub fn parse_source(
    source: &str,
    file: &str,
    handler: &mut ErrorHandler,
) -> Result<Program, CompilationError> {
    let file = Rc::new(file.to_string());

    let scanner = match Scanner::new(source, Rc::clone(&file)) {
        Ok(scanner) => scanner,
        Err(error) => return Err(abort(handler, error)),
    };

    Parser::new(scanner, file, handler).parse()
}
