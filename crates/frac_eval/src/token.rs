use frac_error::SpanRange;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: SpanRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `42` or `0.75`, as written
    Number(String),
    Identifier(String),
    Punct(Punct),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Punct {
    Add,
    Sub,
    Mul,
    Div,
    OpenParen,
    CloseParen,
    Comma,
}

impl Punct {
    pub fn try_from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Punct::Add),
            '-' => Some(Punct::Sub),
            '*' => Some(Punct::Mul),
            '/' => Some(Punct::Div),
            '(' => Some(Punct::OpenParen),
            ')' => Some(Punct::CloseParen),
            ',' => Some(Punct::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Punct::Add => "+",
            Punct::Sub => "-",
            Punct::Mul => "*",
            Punct::Div => "/",
            Punct::OpenParen => "(",
            Punct::CloseParen => ")",
            Punct::Comma => ",",
        };

        write!(fmt, "{s}")
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            TokenKind::Number(n) => write!(fmt, "{n}"),
            TokenKind::Identifier(id) => write!(fmt, "{id}"),
            TokenKind::Punct(p) => write!(fmt, "{p}"),
        }
    }
}
