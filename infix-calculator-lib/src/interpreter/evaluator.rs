use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use crate::interpreter::variables::VariableStore;

/// Evaluates a sequence of tokens in postfix order.
///
/// Numerals are parsed with `.` as decimal separator. Identifiers are always
/// looked up in `variables`, so `inf` or `nan` are ordinary variable names.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens in postfix order, as produced by the parser.
/// * `variables`: The variables the expression may refer to.
///
/// returns: The value of the expression.
pub fn evaluate(postfix_tokens: &[Token], variables: &VariableStore) -> Result<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Operator(operator) => {
                let right = values.pop().ok_or(CalculatorError::MalformedExpression)?;
                let left = values.pop().ok_or(CalculatorError::MalformedExpression)?;
                values.push(apply(*operator, left, right)?);
            }
            Token::Number(text) => values.push(parse_numeral(text, variables)?),
            Token::Identifier(name) => values.push(lookup_variable(name, variables)?),
            Token::Symbol(symbol) => return Err(CalculatorError::UnsupportedOperator(*symbol)),
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(CalculatorError::MalformedExpression)
            }
        }
    }

    match (values.pop(), values.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(CalculatorError::MalformedExpression),
    }
}

fn apply(operator: BinaryOperator, left: f64, right: f64) -> Result<f64> {
    if operator == BinaryOperator::Divide && right == 0.0 {
        return Err(CalculatorError::DivideByZero);
    }
    Ok(operator.evaluate(left, right))
}

/// Numerals that do not parse, such as `1,5`, fall back to a variable lookup.
fn parse_numeral(text: &str, variables: &VariableStore) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => lookup_variable(text, variables),
    }
}

fn lookup_variable(name: &str, variables: &VariableStore) -> Result<f64> {
    variables
        .get(name)
        .ok_or_else(|| CalculatorError::UnknownVariable(name.to_string()))
}
