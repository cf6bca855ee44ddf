//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates AST expressions to compute a numeric result.
//! CONTEXT: After an expression is parsed into an AST, this module traverses
//! the tree and computes the final f64. Evaluation stops at the first
//! numeric failure; there is no partial result.
//!
//! SUPPORTED FEATURES:
//! - Number literals
//! - Binary operations: +, -, *, /
//! - Unary operations: - (negation)
//! - Division by zero and non-finite results are reported as errors

use crate::error::{EvalError, MathError};
use parser::{parse, tokenize, BinaryOperator, Expression, Token, UnaryOperator};

/// Either the computed value or the first error encountered.
pub type EvalResult = Result<f64, EvalError>;

/// The expression evaluator.
/// Holds no state; one is created per evaluation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates an AST expression and returns the result.
    pub fn evaluate(&self, expr: &Expression) -> Result<f64, MathError> {
        match expr {
            Expression::Number(n) => finite(*n),
            Expression::Chain { first, rest } => self.eval_chain(first, rest),
            Expression::UnaryOp { op, operand } => self.eval_unary_op(*op, operand),
        }
    }

    /// Folds a same-precedence run left to right, stopping at the first error.
    fn eval_chain(
        &self,
        first: &Expression,
        rest: &[(BinaryOperator, Expression)],
    ) -> Result<f64, MathError> {
        let mut acc = self.evaluate(first)?;
        for (op, operand) in rest {
            let r = self.evaluate(operand)?;
            acc = apply(acc, *op, r)?;
        }
        Ok(acc)
    }

    fn eval_unary_op(&self, op: UnaryOperator, operand: &Expression) -> Result<f64, MathError> {
        let value = self.evaluate(operand)?;
        match op {
            UnaryOperator::Negate => Ok(-value),
        }
    }
}

fn apply(l: f64, op: BinaryOperator, r: f64) -> Result<f64, MathError> {
    match op {
        BinaryOperator::Add => finite(l + r),
        BinaryOperator::Subtract => finite(l - r),
        BinaryOperator::Multiply => finite(l * r),
        BinaryOperator::Divide => {
            if r == 0.0 {
                return Err(MathError::DivisionByZero);
            }
            finite(l / r)
        }
    }
}

fn finite(value: f64) -> Result<f64, MathError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::Overflow)
    }
}

/// Parses and evaluates an already-tokenized expression.
pub fn evaluate(tokens: &[Token]) -> EvalResult {
    let expr = parse(tokens)?;
    Ok(Evaluator::new().evaluate(&expr)?)
}

/// Tokenizes, parses and evaluates an expression string.
pub fn evaluate_expression(expression: &str) -> EvalResult {
    let result = tokenize(expression)
        .map_err(EvalError::from)
        .and_then(|tokens| evaluate(&tokens));

    match &result {
        Ok(value) => log::debug!("evaluated {:?} = {}", expression, value),
        Err(e) => log::debug!("rejected {:?} ({}): {}", expression, e.kind(), e),
    }

    result
}
