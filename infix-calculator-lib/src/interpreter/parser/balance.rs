/// Whether every `(` in the expression is closed by a later `)`.
///
/// A `)` without a preceding unclosed `(` fails immediately.
pub fn is_balanced(expression: &str) -> bool {
    let mut open_parentheses: usize = 0;
    for character in expression.chars() {
        match character {
            '(' => open_parentheses += 1,
            ')' => match open_parentheses.checked_sub(1) {
                Some(remaining) => open_parentheses = remaining,
                None => return false,
            },
            _ => {}
        }
    }
    open_parentheses == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
        expression = {
            "",
            "1 + 1",
            "(1)",
            "((1 + 2) * (3 - 4))",
            "3 * (1/4",
            "3 * 1/4)",
            ")(",
            "(()",
            "())(",
        },
        expected = { true, true, true, true, false, false, false, false, false }
    )]
    fn parentheses_must_close_in_order(expression: &str, expected: bool) {
        assert_eq!(is_balanced(expression), expected);
    }
}
