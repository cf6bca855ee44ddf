//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! The transport layer only needs `evaluate_expression` and `EvalError`.

pub mod error;
pub mod evaluator;

// Re-export commonly used types at the crate root
pub use error::{ErrorKind, EvalError, MathError};
pub use evaluator::{evaluate, evaluate_expression, EvalResult, Evaluator};
pub use parser::{Expression, LexError, ParseError, Token};
