use crate::command::Command;
use anyhow::{bail, Context, Result};
use infix_calculator::interpreter::chartype::is_alpha;
use infix_calculator::interpreter::tokens_to_string;
use infix_calculator::{Calculator, DEFAULT_VARIABLE_NAME};
use log::debug;
use std::io::Write;

/// What the session should do after a line has been handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Flow {
    pub fn is_exit(&self) -> bool {
        *self == Flow::Exit
    }
}

/// An expression together with the variable its result is stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub target: &'a str,
    pub expression: &'a str,
}

impl<'a> Statement<'a> {
    /// Splits `NAME = EXPRESSION` into its parts. Without an `=`,
    /// the whole line is the expression and the result goes into `ans`.
    pub fn parse(line: &'a str) -> Result<Self> {
        match line.split_once('=') {
            None => Ok(Statement {
                target: DEFAULT_VARIABLE_NAME,
                expression: line.trim(),
            }),
            Some((target, expression)) => {
                let target = target.trim();
                if target.is_empty() || !target.chars().all(is_alpha) {
                    bail!("'{}' is not a valid variable name", target);
                }
                Ok(Statement {
                    target,
                    expression: expression.trim(),
                })
            }
        }
    }
}

/// Formats whole numbers without decimals and everything else with four.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// One interactive session, owning the calculator and its variables.
pub struct Session {
    calculator: Calculator,
    show_postfix: bool,
}

impl Session {
    pub fn new(show_postfix: bool) -> Self {
        Session {
            calculator: Calculator::new(),
            show_postfix,
        }
    }

    #[cfg(test)]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Runs a command or evaluates a statement, writing any response to `output`.
    ///
    /// Only failures to write are returned as errors. Mistakes in the input are
    /// reported to `output` and the session continues.
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        let line = line.trim();

        if let Some(command) = Command::from_line(line) {
            let mut words = line.split(' ');
            let name = words.next().unwrap_or_default();
            let arguments: Vec<&str> = words.collect();
            return command
                .execute(name, &arguments, &self.calculator, output)
                .context("failed to write command output");
        }

        let statement = match Statement::parse(line) {
            Ok(statement) => statement,
            Err(error) => {
                writeln!(output, "Error: {}", error).context("failed to write error")?;
                return Ok(Flow::Continue);
            }
        };

        if self.show_postfix {
            if let Ok(postfix_tokens) = self.calculator.to_postfix(statement.expression) {
                writeln!(output, "{}", tokens_to_string(&postfix_tokens))
                    .context("failed to write postfix expression")?;
            }
        }

        let written = match self.evaluate_statement(&statement) {
            Ok(value) => writeln!(output, "{}", format_value(value)),
            Err(error) => writeln!(output, "Error: {}", error),
        };
        written.context("failed to write result")?;

        Ok(Flow::Continue)
    }

    /// Evaluates the statement and stores the result, leaving the variables
    /// untouched on failure.
    fn evaluate_statement(&mut self, statement: &Statement) -> infix_calculator::Result<f64> {
        let value = self.calculator.evaluate(statement.expression)?;
        self.calculator
            .variables_mut()
            .set(statement.target, value);
        debug!("stored {} in {}", value, statement.target);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn run(session: &mut Session, line: &str) -> (Flow, String) {
        let mut output = Vec::new();
        let flow = session.handle_line(line, &mut output).unwrap();
        (flow, String::from_utf8(output).unwrap())
    }

    #[parameterized(
        value = { 2.0, -15.0, 0.25, -2.5, 1.0 / 3.0, 512.0, 0.0 },
        expected = { "2", "-15", "0.2500", "-2.5000", "0.3333", "512", "0" }
    )]
    fn value_is_formatted_with_decimals_only_when_fractional(value: f64, expected: &str) {
        assert_eq!(format_value(value), expected);
    }

    #[parameterized(
        line = { "1 + 1", "x = 2 * 3", "  rate =4", "y=" },
        target = { "ans", "x", "rate", "y" },
        expression = { "1 + 1", "2 * 3", "4", "" }
    )]
    fn statement_is_split_into_target_and_expression(
        line: &str,
        target: &str,
        expression: &str,
    ) {
        assert_eq!(
            Statement::parse(line).unwrap(),
            Statement { target, expression }
        );
    }

    #[parameterized(
        line = { "= 3", "x1 = 3", "a b = 3", "2 = 3" }
    )]
    fn statement_with_invalid_target_is_rejected(line: &str) {
        assert!(Statement::parse(line).is_err());
    }

    #[test]
    fn invalid_assignment_target_is_reported() {
        let mut session = Session::new(false);

        let (flow, printed) = run(&mut session, "2x = 4");

        assert_eq!(flow, Flow::Continue);
        assert_eq!(printed, "Error: '2x' is not a valid variable name\n");
        assert!(session.calculator().variables().is_empty());
    }

    #[test]
    fn result_is_stored_in_ans() {
        let mut session = Session::new(false);

        let (flow, printed) = run(&mut session, "6 * 7\n");

        assert_eq!(flow, Flow::Continue);
        assert_eq!(printed, "42\n");
        assert_eq!(session.calculator().variables().get("ans"), Some(42.0));
    }

    #[test]
    fn assignment_stores_result_under_given_name() {
        let mut session = Session::new(false);

        run(&mut session, "x = 5");
        let (_, printed) = run(&mut session, "x + 1");

        assert_eq!(printed, "6\n");
        assert_eq!(session.calculator().variables().get("x"), Some(5.0));
        assert_eq!(session.calculator().variables().get("ans"), Some(6.0));
    }

    #[test]
    fn failed_evaluation_reports_error_and_keeps_variables() {
        let mut session = Session::new(false);
        run(&mut session, "x = 5");

        let (flow, printed) = run(&mut session, "x = 1 / 0");

        assert_eq!(flow, Flow::Continue);
        assert_eq!(printed, "Error: Division by zero\n");
        assert_eq!(session.calculator().variables().get("x"), Some(5.0));
    }

    #[test]
    fn unknown_variable_is_reported_by_name() {
        let mut session = Session::new(false);

        let (_, printed) = run(&mut session, "y * 2");

        assert_eq!(printed, "Error: Unknown variable: 'y'\n");
    }

    #[test]
    fn postfix_is_printed_before_result_when_enabled() {
        let mut session = Session::new(true);

        let (_, printed) = run(&mut session, "2^3^2");

        assert_eq!(printed, "2 3 2 ^ ^\n512\n");
    }

    #[test]
    fn command_error_names_the_word_typed() {
        let mut session = Session::new(false);

        let (quit_flow, quit_printed) = run(&mut session, "quit now");
        let (_, help_printed) = run(&mut session, "? x");

        assert_eq!(quit_flow, Flow::Continue);
        assert_eq!(quit_printed, "Error: command 'quit' has no arguments.\n");
        assert_eq!(help_printed, "Error: command '?' has no arguments.\n");
    }

    #[test]
    fn exit_command_ends_session() {
        let mut session = Session::new(false);

        let (flow, printed) = run(&mut session, "quit");

        assert_eq!(flow, Flow::Exit);
        assert_eq!(printed, "");
    }

    #[test]
    fn empty_line_evaluates_to_zero() {
        let mut session = Session::new(false);

        let (_, printed) = run(&mut session, "");

        assert_eq!(printed, "0\n");
    }
}
