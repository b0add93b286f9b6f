use crate::interpreter::chartype::{is_alpha, is_numeric_part, is_operator_symbol};
use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::token::Token;
use log::trace;

/// What kind of characters the unfinished token is made of.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LexemeKind {
    Digit,
    Letter,
}

/// Accumulates characters into the token currently being scanned.
struct Lexeme {
    text: String,
    kind: Option<LexemeKind>,
}

impl Lexeme {
    fn new() -> Self {
        Lexeme {
            text: String::new(),
            kind: None,
        }
    }

    /// Appends the character, first finishing the current token if it is of another kind.
    fn push(&mut self, character: char, kind: LexemeKind, tokens: &mut Vec<Token>) {
        if self.kind != Some(kind) {
            self.flush(tokens);
        }
        self.text.push(character);
        self.kind = Some(kind);
    }

    fn flush(&mut self, tokens: &mut Vec<Token>) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let token = match self.kind {
            Some(LexemeKind::Letter) => Token::Identifier(text),
            _ => Token::Number(text),
        };
        tokens.push(token);
        self.kind = None;
    }
}

/// Splits an infix expression into tokens.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression in their original order, or
/// [`CalculatorError::UnknownCharacter`] for the first character that
/// cannot be part of an expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
/// use infix_calculator::interpreter::token::Token;
/// # use infix_calculator::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("3x - -2")?;
/// let texts: Vec<String> = tokens.iter().map(Token::to_string).collect();
/// assert_eq!(texts, ["3", "x", "-", "-2"]);
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let characters: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut lexeme = Lexeme::new();

    for (index, &character) in characters.iter().enumerate() {
        if is_numeric_part(character) || is_negative_sign(&characters, index) {
            lexeme.push(character, LexemeKind::Digit, &mut tokens);
        } else if is_operator_symbol(character) {
            lexeme.flush(&mut tokens);
            tokens.push(Token::from_symbol(character));
        } else if is_alpha(character) {
            lexeme.push(character, LexemeKind::Letter, &mut tokens);
        } else if character == ' ' {
            lexeme.flush(&mut tokens);
        } else {
            return Err(CalculatorError::UnknownCharacter { character, index });
        }
    }
    lexeme.flush(&mut tokens);

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

/// Whether the `-` at `index` is the sign of the numeral following it,
/// rather than a subtraction.
///
/// That is the case when a numeral follows directly and the `-` either
/// starts the expression or comes after a symbol or a space.
fn is_negative_sign(characters: &[char], index: usize) -> bool {
    if characters[index] != '-' {
        return false;
    }

    let next_is_numeric = characters
        .get(index + 1)
        .map_or(false, |&next| is_numeric_part(next));
    if !next_is_numeric {
        return false;
    }

    match index.checked_sub(1).map(|previous| characters[previous]) {
        None => true,
        Some(previous) => is_operator_symbol(previous) || previous == ' ',
    }
}
