use thiserror::Error;

/// Everything that can go wrong while evaluating a single expression.
///
/// Every error is terminal for the evaluation that produced it,
/// there is never a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Unknown character '{character}' at index {index}")]
    UnknownCharacter { character: char, index: usize },

    #[error("Unknown variable: '{0}'")]
    UnknownVariable(String),

    #[error("Division by zero")]
    DivideByZero,

    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(char),

    #[error("Malformed expression")]
    MalformedExpression,
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
