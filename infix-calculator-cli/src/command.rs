use crate::repl::{format_value, Flow};
use infix_calculator::Calculator;
use std::io;
use std::io::Write;

/// A word that is handled by the session itself instead of being evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Variables,
    Help,
    Version,
}

/// Commands in the order `help` lists them.
static LISTED_COMMANDS: [(&str, Command); 4] = [
    ("exit", Command::Exit),
    ("vars", Command::Variables),
    ("help", Command::Help),
    ("version", Command::Version),
];

pub fn title() -> String {
    format!(
        "infix-calculator {}, Copyright (C) 2022 {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    )
}

pub fn license() -> &'static str {
    "infix-calculator comes with ABSOLUTELY NO WARRANTY.\n\
     This is free software, and you are welcome to redistribute it\n\
     under certain conditions. See the LICENSE file for details."
}

/// Printed once when an interactive session starts.
pub fn banner() -> String {
    format!(
        "{}\n{}\nType 'help' for a list of commands.",
        title(),
        license()
    )
}

impl Command {
    /// The command named by the first word of the line, if any.
    pub fn from_line(line: &str) -> Option<Command> {
        match line.split(' ').next()? {
            "exit" | "quit" => Some(Command::Exit),
            "vars" => Some(Command::Variables),
            "help" | "?" => Some(Command::Help),
            "version" => Some(Command::Version),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Exit => "Exit the calculator",
            Command::Variables => "Print list of variables and their values",
            Command::Help => "Print help text",
            Command::Version => "Print version information",
        }
    }

    /// Runs the command. `name` is the word it was invoked with, e.g. `quit` for [`Command::Exit`].
    pub fn execute(
        &self,
        name: &str,
        arguments: &[&str],
        calculator: &Calculator,
        output: &mut impl Write,
    ) -> io::Result<Flow> {
        if !arguments.is_empty() {
            writeln!(output, "Error: command '{}' has no arguments.", name)?;
            return Ok(Flow::Continue);
        }

        match self {
            Command::Exit => return Ok(Flow::Exit),
            Command::Variables => print_variables(calculator, output)?,
            Command::Help => print_help(output)?,
            Command::Version => writeln!(output, "{}", title())?,
        }
        Ok(Flow::Continue)
    }
}

fn print_help(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    for (name, command) in LISTED_COMMANDS.iter() {
        writeln!(output, "  {:<10}{}", name, command.description())?;
    }
    Ok(())
}

fn print_variables(calculator: &Calculator, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Variables:")?;

    let variables = calculator.variables();
    if variables.is_empty() {
        writeln!(output, "  (no variables)")?;
    }

    for name in variables.sorted_names() {
        if let Some(value) = variables.get(&name) {
            writeln!(output, "  {:<10}{}", name, format_value(value))?;
        }
    }
    Ok(())
}
