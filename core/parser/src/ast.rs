//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser converts
//! those tokens into this tree structure. The Evaluator then traverses
//! this tree to compute the final result.
//!
//! SUPPORTED EXPRESSIONS:
//! - Number literals: 42, 3.14
//! - Binary operations: +, -, *, /
//! - Unary operations: - (negation)
//! - Grouping is implicit in the tree shape; parentheses leave no node.
//!
//! A run of same-precedence operators (1+2-3+...) is stored as one flat
//! Chain node rather than a left-deep tree, so the height of the tree only
//! grows with parentheses and unary minus.

/// Represents a parsed arithmetic expression.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// A number literal.
    Number(f64),

    /// Operators of one precedence level applied left to right:
    /// `first op1 e1 op2 e2 ...` means `((first op1 e1) op2 e2) ...`.
    /// `rest` is never empty.
    Chain {
        first: Box<Expression>,
        rest: Vec<(BinaryOperator, Expression)>,
    },

    /// A unary operation: op operand (e.g., -5).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
}

/// Binary operators, in two precedence groups.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    // Additive (lower precedence)
    Add,      // +
    Subtract, // -

    // Multiplicative
    Multiply, // *
    Divide,   // /
}

/// Unary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Negate, // -
}

impl Expression {
    pub fn chain(first: Expression, rest: Vec<(BinaryOperator, Expression)>) -> Self {
        Expression::Chain {
            first: Box::new(first),
            rest,
        }
    }

    /// A single binary operation: left op right (e.g., 5 + 3).
    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::chain(left, vec![(op, right)])
    }

    pub fn negate(operand: Expression) -> Self {
        Expression::UnaryOp {
            op: UnaryOperator::Negate,
            operand: Box::new(operand),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `(2 + (3 * 4))`.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Chain { first, rest } => {
                write!(f, "{}{}", "(".repeat(rest.len()), first)?;
                for (op, operand) in rest {
                    write!(f, " {} {})", op, operand)?;
                }
                Ok(())
            }
            Expression::UnaryOp { op, operand } => write!(f, "{}{}", op, operand),
        }
    }
}
