use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("class", TokenKind::Class);
        map.insert("extends", TokenKind::Extends);
        map.insert("var", TokenKind::Var);
        map.insert("new", TokenKind::New);
        map.insert("cast", TokenKind::Cast);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("break", TokenKind::Break);
        map.insert("this", TokenKind::This);
        map.insert("super", TokenKind::Super);
        map.insert("true", TokenKind::BooleanConst);
        map.insert("false", TokenKind::BooleanConst);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    IntConst,
    StrConst,
    BooleanConst,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Comma,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Class,
    Extends,
    Var,
    New,
    Cast,
    Return,
    If,
    Else,
    While,
    For,
    Break,
    This,
    Super,
}

impl TokenKind {
    /// The spelling used for this kind in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "identifier",
            TokenKind::IntConst => "integer constant",
            TokenKind::StrConst => "string constant",
            TokenKind::BooleanConst => "boolean constant",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::Class => "class",
            TokenKind::Extends => "extends",
            TokenKind::Var => "var",
            TokenKind::New => "new",
            TokenKind::Cast => "cast",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Break => "break",
            TokenKind::This => "this",
            TokenKind::Super => "super",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::IntConst | TokenKind::BooleanConst => {
                write!(f, "{}", self.value)
            }
            TokenKind::StrConst => write!(f, "\"{}\"", self.value),
            _ => write!(f, "{}", self.kind),
        }
    }
}
