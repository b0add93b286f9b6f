mod command;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::tokens_to_string;
use infix_calculator::Calculator;
use log::info;
use std::io;
use std::io::Write;

use crate::repl::{format_value, Session};

/// Evaluates arithmetic expressions, interactively or one at a time
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Starts an interactive session when omitted
    expression: Option<String>,

    /// Also print every expression in postfix order
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match args.expression {
        Some(expression) => evaluate_once(&expression, args.postfix),
        None => run_interactive(args.postfix),
    }
}

fn evaluate_once(expression: &str, show_postfix: bool) -> Result<()> {
    let calculator = Calculator::new();
    if show_postfix {
        let postfix_tokens = calculator
            .to_postfix(expression)
            .with_context(|| format!("could not parse expression '{}'", expression))?;
        println!("{}", tokens_to_string(&postfix_tokens));
    }
    let value = calculator
        .evaluate(expression)
        .with_context(|| format!("could not evaluate expression '{}'", expression))?;
    println!("{}", format_value(value));
    Ok(())
}

fn run_interactive(show_postfix: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "{}", command::banner()).context("failed to write banner")?;

    let mut session = Session::new(show_postfix);
    let mut line = String::new();
    loop {
        write!(output, "\n> ").context("failed to write prompt")?;
        output.flush().context("failed to flush prompt")?;

        line.clear();
        let bytes_read = stdin
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        if bytes_read == 0 {
            info!("end of input, leaving");
            break;
        }

        if session.handle_line(&line, &mut output)?.is_exit() {
            break;
        }
    }
    Ok(())
}
