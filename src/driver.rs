//! Orchestrates the four CLI commands over the library API, mapping each
//! to a process exit code (spec.md §6).
//!
//! Generalizes the teacher's `driver::build`/`driver::run` split (one
//! function per top-level command, each returning the exit code `main`
//! should use) to the four commands this interpreter supports.

use std::io;
use std::io::Write as _;

use crate::interpreter::Interpreter;
use crate::lexer::scan;
use crate::parser::{parse_expression, parse_program};
use crate::printer::print_expr;

/// `exit 1`: CLI misuse (spec.md §6).
pub const EXIT_USAGE: i32 = 1;
/// `exit 65`: lexical or syntactic failure (spec.md §6).
pub const EXIT_DATA_ERROR: i32 = 65;
/// `exit 70`: runtime failure (spec.md §6).
pub const EXIT_SOFTWARE: i32 = 70;

/// Runs the `tokenize` command: scans `source` and prints one token per
/// line to `stdout`, per the dump format in spec.md §6.
///
/// Returns [`EXIT_DATA_ERROR`] if any lexical error was reported, else 0.
/// Lexical errors themselves are already on stderr by the time this
/// returns (the scanner reports them as it goes, spec.md §4.1).
pub fn tokenize(source: &str, stdout: &mut impl io::Write) -> i32 {
    let (tokens, has_error) = scan(source);
    for token in &tokens {
        writeln!(stdout, "{}", token).expect("write to stdout failed");
    }
    if has_error { EXIT_DATA_ERROR } else { 0 }
}

/// Runs the `parse` command: parses `source` as a single expression and
/// prints its canonical parenthesized form, per spec.md §4.3/§6.
///
/// Returns [`EXIT_DATA_ERROR`] on any lexical or syntactic failure.
pub fn parse(source: &str, stdout: &mut impl io::Write) -> i32 {
    let (tokens, lex_error) = scan(source);
    if lex_error {
        return EXIT_DATA_ERROR;
    }
    match parse_expression(tokens) {
        Ok(expr) => {
            writeln!(stdout, "{}", print_expr(&expr)).expect("write to stdout failed");
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            EXIT_DATA_ERROR
        }
    }
}

/// Runs the `evaluate` command: parses `source` as a single expression
/// and prints its stringified value, per spec.md §4.4/§4.6/§6.
///
/// Returns [`EXIT_DATA_ERROR`] on lex/parse failure, [`EXIT_SOFTWARE`] on
/// a runtime error.
pub fn evaluate(source: &str, stdout: &mut impl io::Write) -> i32 {
    let (tokens, lex_error) = scan(source);
    if lex_error {
        return EXIT_DATA_ERROR;
    }
    let expr = match parse_expression(tokens) {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("{}", err);
            return EXIT_DATA_ERROR;
        }
    };

    let mut interp = Interpreter::new(Vec::<u8>::new());
    match interp.evaluate(&expr) {
        Ok(value) => {
            writeln!(stdout, "{}", value).expect("write to stdout failed");
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            EXIT_SOFTWARE
        }
    }
}

/// Runs the `run` command: parses `source` as a whole program and
/// executes it for its side effects, per spec.md §4.4/§6.
///
/// Returns [`EXIT_DATA_ERROR`] on any lex/parse failure (no statements
/// run at all in that case — spec.md §7 allows no partial execution past
/// a syntax error), [`EXIT_SOFTWARE`] on a runtime error.
pub fn run(source: &str, stdout: impl io::Write) -> i32 {
    let (tokens, lex_error) = scan(source);
    let (statements, parse_error) = parse_program(tokens);
    if lex_error || parse_error {
        return EXIT_DATA_ERROR;
    }

    let mut interp = Interpreter::new(stdout);
    match interp.execute_all(&statements) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            EXIT_SOFTWARE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_empty_input_prints_only_eof() {
        let mut out = Vec::new();
        let code = tokenize("", &mut out);
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "EOF  null\n");
    }

    #[test]
    fn tokenize_reports_error_exit_code() {
        let mut out = Vec::new();
        let code = tokenize("@", &mut out);
        assert_eq!(code, EXIT_DATA_ERROR);
    }

    #[test]
    fn parse_prints_first_expression() {
        let mut out = Vec::new();
        let code = parse("1 + 2 * 3", &mut out);
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "(+ 1.0 (* 2.0 3.0))\n");
    }

    #[test]
    fn parse_propagates_lex_errors_as_data_error() {
        let mut out = Vec::new();
        let code = parse("@", &mut out);
        assert_eq!(code, EXIT_DATA_ERROR);
    }

    #[test]
    fn evaluate_prints_stringified_value() {
        let mut out = Vec::new();
        let code = evaluate("!(5 - 4 > 3 * 2 == !nil)", &mut out);
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "true\n");
    }

    #[test]
    fn evaluate_maps_runtime_error_to_exit_70() {
        let mut out = Vec::new();
        let code = evaluate("-nil", &mut out);
        assert_eq!(code, EXIT_SOFTWARE);
        assert_eq!(String::from_utf8(out).unwrap(), "");
    }

    #[test]
    fn run_executes_print_statements_in_order() {
        let mut out = Vec::new();
        let code = run("var a = 1; var b = 2; print a + b;", &mut out);
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "3\n");
    }

    #[test]
    fn run_stops_and_reports_70_on_runtime_error() {
        let mut out = Vec::new();
        let code = run("print undefined;", &mut out);
        assert_eq!(code, EXIT_SOFTWARE);
        assert_eq!(String::from_utf8(out).unwrap(), "");
    }

    #[test]
    fn run_on_syntax_error_executes_nothing() {
        let mut out = Vec::new();
        let code = run("var x = ;", &mut out);
        assert_eq!(code, EXIT_DATA_ERROR);
        assert_eq!(String::from_utf8(out).unwrap(), "");
    }
}
