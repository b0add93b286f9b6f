use crate::interpreter::chartype::is_operator_symbol;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// The raw text of a numeral, which is only parsed during evaluation.
    Number(String),
    Identifier(String),
    Operator(BinaryOperator),
    /// A symbol character that no operator is registered for, e.g. `%`.
    Symbol(char),
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// Classifies a single symbol character.
    pub fn from_symbol(symbol: char) -> Token {
        match symbol {
            '(' => Token::OpenParenthesis,
            ')' => Token::CloseParenthesis,
            symbol => match BinaryOperator::lookup(symbol) {
                Some(operator) => Token::Operator(operator),
                None => Token::Symbol(symbol),
            },
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Symbol(symbol) => write!(f, "{}", symbol),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (None, _) => Err(()),
            (Some(symbol), None) if is_operator_symbol(symbol) => Ok(Token::from_symbol(symbol)),
            (Some(first), _) if first.is_ascii_alphabetic() => {
                Ok(Token::Identifier(input.to_string()))
            }
            _ => Ok(Token::Number(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
        text = { "+", "-", "*", "/", "^", "(", ")", "%", "12", "-3.5", "1,5", "abc" },
        expected = {
            Token::Operator(BinaryOperator::Add),
            Token::Operator(BinaryOperator::Subtract),
            Token::Operator(BinaryOperator::Multiply),
            Token::Operator(BinaryOperator::Divide),
            Token::Operator(BinaryOperator::Exponentiate),
            Token::OpenParenthesis,
            Token::CloseParenthesis,
            Token::Symbol('%'),
            Token::Number("12".to_string()),
            Token::Number("-3.5".to_string()),
            Token::Number("1,5".to_string()),
            Token::Identifier("abc".to_string()),
        }
    )]
    fn text_is_parsed_into_matching_token(text: &str, expected: Token) {
        assert_eq!(text.parse::<Token>(), Ok(expected));
    }

    #[test]
    fn empty_text_is_not_a_token() {
        assert_eq!("".parse::<Token>(), Err(()));
    }

    #[test]
    fn token_displays_as_its_source_text() {
        let tokens: Vec<Token> = ["-2.5", "*", "(", "ans", "%", ")"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        let texts: Vec<String> = tokens.iter().map(Token::to_string).collect();
        assert_eq!(texts, ["-2.5", "*", "(", "ans", "%", ")"]);
    }
}
