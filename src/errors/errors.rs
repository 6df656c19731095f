use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The category a diagnostic is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ReadError,
    LexError,
    ParseError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ReadError => write!(f, "READ_ERROR"),
            ErrorKind::LexError => write!(f, "LEX_ERROR"),
            ErrorKind::ParseError => write!(f, "PARSE_ERROR"),
        }
    }
}

/// A single diagnostic: what went wrong and where.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {}", .internal_error.kind(), .internal_error)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Human readable description of the unmet expectation.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> String {
        self.get_kind().to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileReadError { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("close the comment with `*/`"))
            }
            ErrorImpl::ExpectedToken { found, .. } if found == "EOF" => ErrorTip::Suggestion(
                String::from("reached the end of the file, is a `}` missing?"),
            ),
            ErrorImpl::ExpectedToken { .. } => ErrorTip::None,
            ErrorImpl::MissingToken { token, .. } if token == ";" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::MissingToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("could not read {file}: {reason}")]
    FileReadError { file: String, reason: String },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("expected {expected}, found `{found}`")]
    ExpectedToken { expected: String, found: String },
    #[error("invalid {construct} - missing `{token}`")]
    MissingToken { construct: String, token: String },
    #[error("error parsing integer constant: {token:?}")]
    NumberParseError { token: String },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::FileReadError { .. } => ErrorKind::ReadError,
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedComment => {
                ErrorKind::LexError
            }
            ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::MissingToken { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::ParseError,
        }
    }
}

/// Collects the diagnostics reported while parsing.
///
/// A handler is lent to one parse at a time. Reusing it for another file
/// without calling [`ErrorHandler::clear`] keeps the earlier diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler {
    errors: Vec<Error>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn list(&self) -> &[Error] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Returned when a parse is aborted. Holds the handler's diagnostics as they
/// were at the moment of failure.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("compilation failed with {} error(s)", .errors.len())]
pub struct CompilationError {
    errors: Vec<Error>,
}

impl CompilationError {
    pub fn new(handler: &ErrorHandler) -> Self {
        CompilationError {
            errors: handler.list().to_vec(),
        }
    }

    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }
}
