//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the arithmetic expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert expression strings into evaluatable expression trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /
//! - Integer and decimal literals: 42, 3.14, .5
//! - Parentheses for grouping
//! - Unary negation: -5, --5

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use lexer::{tokenize, LexError, LexResult, Lexer};
pub use parser::{parse, ParseError, ParseResult, Parser, MAX_NESTING_DEPTH};
pub use token::{Operator, Token};
