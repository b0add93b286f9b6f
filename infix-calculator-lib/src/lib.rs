pub mod interpreter;

pub use interpreter::error::{CalculatorError, Result};
pub use interpreter::variables::{VariableStore, DEFAULT_VARIABLE_NAME};
pub use interpreter::Calculator;
