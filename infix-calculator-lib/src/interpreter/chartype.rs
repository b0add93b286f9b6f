//! Single-character predicates used by the lexer and the parenthesis check.

/// Digits and the two decimal separators `.` and `,`.
///
/// A `,` is grouped together with digits while tokenizing, but numerals are
/// later parsed with `.` as the only decimal separator, so `1,5` ends up
/// being looked up as a variable.
pub fn is_numeric_part(character: char) -> bool {
    character.is_ascii_digit() || character == '.' || character == ','
}

pub fn is_alpha(character: char) -> bool {
    character.is_ascii_alphabetic()
}

/// Characters that always form a token of their own.
///
/// `%` is recognised here even though no operator is registered for it.
pub fn is_operator_symbol(character: char) -> bool {
    matches!(character, '^' | '/' | '*' | '+' | '-' | '%' | '(' | ')')
}
