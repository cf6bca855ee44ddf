//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a sequence of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes the
//! tokens produced by the Lexer and builds an Expression tree that can be evaluated.
//!
//! GRAMMAR:
//!   expression     --> additive
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/") unary )*
//!   unary          --> "-" unary | primary
//!   primary        --> NUMBER | "(" expression ")"
//!
//! Each loop collects one precedence level into a flat Chain that the
//! evaluator folds left-to-right: 8/2/2 means (8/2)/2. Only "(" and unary
//! "-" recurse, and both count against MAX_NESTING_DEPTH, so long flat
//! input like 1+1+...+1 never deepens the call stack or the tree.

use crate::ast::{BinaryOperator, Expression};
use crate::token::{Operator, Token};
use thiserror::Error;

/// Maximum combined depth of parentheses and unary minus signs.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser errors with descriptive messages.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { found: Token, expected: &'static str },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("unexpected {found} after end of expression")]
    TrailingTokens { found: Token },

    #[error("expression is nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

const OPERAND: &str = "a number, '(' or '-'";

/// The Parser holds the token slice and the cursor into it.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    /// Current nesting of "(" and unary "-"
    depth: usize,
    /// Parentheses opened and not yet closed
    open_parens: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
            open_parens: 0,
        }
    }

    /// Parses the entire token sequence and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let expr = self.parse_expression()?;

        // Ensure we consumed all tokens
        match self.current_token() {
            None => Ok(expr),
            Some(Token::RParen) => Err(ParseError::UnbalancedParens),
            Some(found) => Err(ParseError::TrailingTokens { found }),
        }
    }

    fn current_token(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Runs `parse` one nesting level deeper, failing once the limit is hit.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Entry point for expression parsing.
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_additive()
    }

    /// Parses additive expressions (+ and -).
    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let first = self.parse_multiplicative()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current_token() {
                Some(Token::Operator(Operator::Plus)) => BinaryOperator::Add,
                Some(Token::Operator(Operator::Minus)) => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance();
            rest.push((op, self.parse_multiplicative()?));
        }

        Ok(fold(first, rest))
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let first = self.parse_unary()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current_token() {
                Some(Token::Operator(Operator::Asterisk)) => BinaryOperator::Multiply,
                Some(Token::Operator(Operator::Slash)) => BinaryOperator::Divide,
                _ => break,
            };

            self.advance();
            rest.push((op, self.parse_unary()?));
        }

        Ok(fold(first, rest))
    }

    /// Parses unary expressions (negation).
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        if self.current_token() == Some(Token::Operator(Operator::Minus)) {
            self.advance();
            let operand = self.nested(Self::parse_unary)?;
            return Ok(Expression::negate(operand));
        }

        self.parse_primary()
    }

    /// Parses primary expressions (number literals and parentheses).
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.current_token() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expression::Number(n))
            }

            // Parenthesized expression
            Some(Token::LParen) => {
                self.advance();
                self.open_parens += 1;
                let expr = self.nested(Self::parse_expression)?;
                match self.current_token() {
                    Some(Token::RParen) => {
                        self.advance();
                        self.open_parens -= 1;
                        Ok(expr)
                    }
                    None => Err(ParseError::UnbalancedParens),
                    Some(found) => Err(ParseError::UnexpectedToken {
                        found,
                        expected: "')'",
                    }),
                }
            }

            // A ")" that closes nothing
            Some(Token::RParen) if self.open_parens == 0 => Err(ParseError::UnbalancedParens),

            Some(found) => Err(ParseError::UnexpectedToken {
                found,
                expected: OPERAND,
            }),

            // Input ran out inside an open "("
            None if self.open_parens > 0 => Err(ParseError::UnbalancedParens),

            None => Err(ParseError::UnexpectedEnd { expected: OPERAND }),
        }
    }
}

/// Wraps a same-precedence run into one Chain node; a lone operand stays as is.
fn fold(first: Expression, rest: Vec<(BinaryOperator, Expression)>) -> Expression {
    if rest.is_empty() {
        first
    } else {
        Expression::chain(first, rest)
    }
}

/// Convenience function to parse a token sequence in one call.
pub fn parse(tokens: &[Token]) -> ParseResult<Expression> {
    Parser::new(tokens).parse()
}
