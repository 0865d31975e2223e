//! CLI entry point: `lak <command> <filename>`.
//!
//! Dispatches one of the four commands in spec.md §6 to [`lak::driver`] and
//! exits with the code it returns. Command-line misuse is handled outside
//! clap's own error path: spec.md §6 pins `exit 1` with a specific usage
//! line on stderr for "unknown command or fewer than two arguments", which
//! does not match clap's default `exit(2)` auto-generated error — so this
//! binary calls [`clap::Parser::try_parse`] and renders its own usage
//! message on failure instead of letting clap's derive macro exit on our
//! behalf.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use lak::driver;

const USAGE: &str = "Usage: lak <command> <filename>";

#[derive(Parser)]
#[command(name = "lak", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    command: Command,
    filename: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Tokenize,
    Parse,
    Evaluate,
    Run,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{}", USAGE);
            return ExitCode::from(driver::EXIT_USAGE as u8);
        }
    };

    let source = match std::fs::read_to_string(&cli.filename) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read file '{}': {}", cli.filename, err);
            return ExitCode::from(driver::EXIT_USAGE as u8);
        }
    };

    let stdout = std::io::stdout();
    let code = match cli.command {
        Command::Tokenize => driver::tokenize(&source, &mut stdout.lock()),
        Command::Parse => driver::parse(&source, &mut stdout.lock()),
        Command::Evaluate => driver::evaluate(&source, &mut stdout.lock()),
        Command::Run => driver::run(&source, stdout.lock()),
    };

    ExitCode::from(code as u8)
}
