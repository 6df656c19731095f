//! The pull-based token supply the parser reads from.

use std::{rc::Rc, vec::IntoIter};

use crate::{errors::errors::Error, Position, Span};

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

/// Anything that can hand the parser one token at a time.
///
/// Once the input is exhausted, `next` must keep returning an `EOF` token.
pub trait TokenSource {
    fn next(&mut self) -> Token;
}

/// Serves tokens produced by [`tokenize`] in order.
pub struct Scanner {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl Scanner {
    pub fn new(source: &str, file: Rc<String>) -> Result<Self, Error> {
        let tokens = tokenize(source, Rc::clone(&file))?;
        Ok(Scanner::from_tokens(tokens, file))
    }

    /// Wraps an existing token list. An `EOF` token is synthesised after the
    /// last token if the list does not end with one.
    pub fn from_tokens(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let eof = match tokens.last() {
            Some(token) if token.kind == TokenKind::EOF => token.clone(),
            Some(token) => eof_at(token.span.end.clone()),
            None => eof_at(Position(0, file)),
        };

        Scanner {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

fn eof_at(position: Position) -> Token {
    Token {
        kind: TokenKind::EOF,
        value: String::from("EOF"),
        span: Span {
            start: position.clone(),
            end: position,
        },
    }
}

impl TokenSource for Scanner {
    fn next(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }
}
