pub mod chartype;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;
pub mod variables;

use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::token::Token;
use crate::interpreter::variables::VariableStore;
use log::debug;
use string_builder::Builder;

/// Evaluates arithmetic expressions against its own set of variables.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    variables: VariableStore,
}

impl Calculator {
    /// Creates a calculator with no variables defined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator that reads from the given variables.
    pub fn with_variables(variables: VariableStore) -> Self {
        Calculator { variables }
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariableStore {
        &mut self.variables
    }

    /// Calculates the value of the given expression.
    ///
    /// Evaluation never changes the variables; storing the result is up to the caller.
    ///
    /// # Arguments
    ///
    /// * `expression`: A text expression in infix format.
    ///
    /// returns: The value of the expression. An empty expression has the value 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::Calculator;
    /// # use infix_calculator::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let mut calculator = Calculator::new();
    /// calculator.variables_mut().set("x", 5.0);
    /// let value = calculator.evaluate("2^3^2 - x")?;
    /// assert_eq!(value, 507.0);
    /// # Ok(()) }
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let expression = expression.trim();
        if !parser::is_balanced(expression) {
            return Err(CalculatorError::UnbalancedParentheses);
        }
        if expression.is_empty() {
            return Ok(0.0);
        }

        let postfix_tokens = convert(expression)?;
        let value = evaluator::evaluate(&postfix_tokens, &self.variables)?;
        debug!("{} = {}", expression, value);
        Ok(value)
    }

    /// Converts the given expression into postfix order without evaluating it.
    ///
    /// # Arguments
    ///
    /// * `expression`: A text expression in infix format.
    ///
    /// returns: The tokens of the expression in postfix order.
    pub fn to_postfix(&self, expression: &str) -> Result<Vec<Token>> {
        let expression = expression.trim();
        if !parser::is_balanced(expression) {
            return Err(CalculatorError::UnbalancedParentheses);
        }
        convert(expression)
    }
}

/// Converts the given balanced infix expression into postfix tokens,
/// which can be evaluated directly.
fn convert(expression: &str) -> Result<Vec<Token>> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::parse(tokens)?;
    Ok(postfix_tokens)
}

/// Pretty-prints the given vector of tokens, separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Identifier("x".to_string()),
///     Token::Number("2".to_string()),
///     "^".parse().unwrap(),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "x 2 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().unwrap_or_default()
}
