pub mod balance;
mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::trace;

pub use balance::is_balanced;

/// Parses the given infix tokens into the equivalent postfix (Reverse Polish) sequence,
/// which can be evaluated with a single value stack.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same values and operators, in postfix order.
///
/// # Examples
///
/// ```
/// # use infix_calculator::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Identifier("x".to_string()),
///     "^".parse().unwrap(),
///     Token::Number("2".to_string()),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens.last(), Some(&"^".parse::<Token>().unwrap()));
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    trace!("postfix order: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
