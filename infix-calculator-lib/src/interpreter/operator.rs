use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Every registered operator, in lookup order.
pub static OPERATORS: [BinaryOperator; 5] = [
    BinaryOperator::Exponentiate,
    BinaryOperator::Divide,
    BinaryOperator::Multiply,
    BinaryOperator::Add,
    BinaryOperator::Subtract,
];

impl BinaryOperator {
    /// Finds the operator registered for the given symbol, if there is one.
    pub fn lookup(symbol: char) -> Option<BinaryOperator> {
        OPERATORS
            .iter()
            .copied()
            .find(|operator| operator.symbol() == symbol)
    }

    /// Whether the token text is exactly the symbol of a registered operator.
    pub fn is_operator(text: &str) -> bool {
        let mut characters = text.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) => Self::lookup(symbol).is_some(),
            _ => false,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 5,
            BinaryOperator::Exponentiate => 10,
        }
    }

    pub(crate) fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence().lt(&other.precedence())
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }

    /// Whether `other`, sitting on top of the operator stack, has to be output
    /// before `self` is pushed.
    pub(crate) fn yields_to(&self, other: &Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence_le(other),
            Associativity::Right => self.precedence_lt(other),
        }
    }

    /// Applies the operator with plain IEEE-754 semantics.
    ///
    /// Division by zero is not intercepted here.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
            BinaryOperator::Exponentiate => a.powf(b),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
