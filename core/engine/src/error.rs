//! FILENAME: core/engine/src/error.rs
//! PURPOSE: Error taxonomy for expression evaluation.
//! CONTEXT: Each pipeline stage has its own error type; EvalError wraps
//! whichever stage failed first so callers get one error per expression.

use parser::{LexError, ParseError};
use thiserror::Error;

/// Numeric failures of a well-formed expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result out of range")]
    Overflow,
}

/// Coarse classification of an evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Math,
}

/// Any failure from tokenizing, parsing or evaluating an expression.
///
/// Lexical and grammatical failures share the `invalid expression` prefix;
/// numeric failures carry their own message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("invalid expression: {0}")]
    Lex(#[from] LexError),

    #[error("invalid expression: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Math(#[from] MathError),
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Lex(_) => ErrorKind::Lex,
            EvalError::Parse(_) => ErrorKind::Parse,
            EvalError::Math(_) => ErrorKind::Math,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "LexError"),
            ErrorKind::Parse => write!(f, "ParseError"),
            ErrorKind::Math => write!(f, "MathError"),
        }
    }
}
