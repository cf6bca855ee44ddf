//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It handles
//! whitespace skipping, number parsing, and single-character operators.
//! Scanning stops at the first character it cannot classify and reports it
//! with its position.
//!
//! SUPPORTED INPUT:
//! - Numbers: 42, 3.14, .5, 5.
//! - Operators: + - * /
//! - Parentheses: ( )

use crate::token::{Operator, Token};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;
use thiserror::Error;

/// Lexical errors. Positions are 0-based character indices into the input.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },
}

pub type LexResult<T> = Result<T, LexError>;

pub struct Lexer<'a> {
    input: Peekable<Enumerate<Chars<'a>>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().enumerate().peekable(),
        }
    }

    /// Advances the lexer and returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.skip_whitespace();

        let (position, ch) = match self.input.next() {
            Some(next) => next,
            None => return Ok(None),
        };

        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,

            // Handle Numbers (starts with digit or dot)
            ch if ch.is_ascii_digit() || ch == '.' => self.read_number(ch, position)?,

            ch => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => {
                    return Err(LexError::UnexpectedCharacter {
                        character: ch,
                        position,
                    })
                }
            },
        };

        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    fn read_number(&mut self, first_char: char, position: usize) -> LexResult<Token> {
        let mut number_str = String::from(first_char);
        let mut has_dot = first_char == '.';

        while let Some(&(_, ch)) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.input.next();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        // A second '.' or a letter glued to the digits ("1.2.3", "2a") makes
        // the whole run a single bad literal.
        if matches!(self.input.peek(), Some(&(_, ch)) if is_number_continuation(ch)) {
            while let Some(&(_, ch)) = self.input.peek() {
                if !is_number_continuation(ch) && !ch.is_ascii_digit() {
                    break;
                }
                number_str.push(ch);
                self.input.next();
            }
            return Err(LexError::MalformedNumber {
                literal: number_str,
                position,
            });
        }

        number_str
            .parse::<f64>()
            .map(Token::Number)
            // Only a lone "." gets here
            .map_err(|_| LexError::MalformedNumber {
                literal: number_str,
                position,
            })
    }
}

/// Characters that cannot legally follow a number literal without an operator.
fn is_number_continuation(ch: char) -> bool {
    ch == '.' || ch == '_' || ch.is_alphabetic()
}

/// Scans the whole input into a token vector, failing on the first bad character.
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
