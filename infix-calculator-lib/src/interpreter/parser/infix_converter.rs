use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Shunting-yard conversion from infix to postfix order.
///
/// Parenthesis balance is expected to have been checked beforehand, so
/// a `)` without a matching `(` and any `(` left over at the end are dropped.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Token::CloseParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output),
            Token::Symbol(symbol) => return Err(CalculatorError::UnsupportedOperator(symbol)),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output);

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut VecDeque<Token>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop_front() {
        if operator.is_operator() {
            output.push(operator);
        }
    }
}

fn parse_closing_parenthesis_token(operators: &mut VecDeque<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.pop_front() {
        if top_of_operator_stack == Token::OpenParenthesis {
            // Discard the open parenthesis.
            return;
        }
        output.push(top_of_operator_stack);
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(Token::Operator(other_operator)) = operators.front() {
        if !operator.yields_to(other_operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(Token::Operator(operator));
}
