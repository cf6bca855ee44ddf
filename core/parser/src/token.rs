//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// The four arithmetic operator symbols.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Asterisk,
    Slash,
}

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    // Literals
    Number(f64),

    // Operators
    Operator(Operator),

    // Delimiters
    LParen,
    RParen,
}

impl Operator {
    /// Maps a character to its operator, if it is one of `+ - * /`.
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Asterisk),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Plus => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
            Operator::Asterisk => write!(f, "*"),
            Operator::Slash => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "'{}'", op),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}
