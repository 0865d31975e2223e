//! Canonical parenthesized text for AST nodes (spec.md §4.3).
//!
//! Used by the `parse` command to print the parsed expression, and
//! available for statements too since spec.md §4.3's table covers both —
//! useful for debugging a parsed `run` program even though no command
//! currently asks for it.

use crate::ast::{Expr, Stmt};
use crate::token::format_number_literal;
use crate::value::Value;

/// Renders `expr` in canonical parenthesized form, per the table in
/// spec.md §4.3.
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(Value::Str(s)) => s.clone(),
        // Uses the token's canonical number text (always one decimal
        // point, e.g. `1` -> `1.0`), not `Value`'s display form, which
        // drops `.0` -- spec.md's scenario 2 prints `(+ 1.0 (* 2.0 3.0))`
        // for `1 + 2 * 3`.
        Expr::Literal(Value::Number(n)) => format_number_literal(*n),
        Expr::Literal(value) => value.to_string(),
        Expr::Grouping(inner) => parenthesize("group", &[inner]),
        Expr::Unary { op, right } => parenthesize(&op.lexeme, &[right]),
        Expr::Binary { left, op, right } => parenthesize(&op.lexeme, &[left, right]),
        Expr::Variable(name) => name.lexeme.clone(),
        Expr::Assignment { name, value } => {
            format!("(= {} {})", name.lexeme, print_expr(value))
        }
    }
}

/// Renders `stmt` in canonical parenthesized form, per the table in
/// spec.md §4.3.
pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(expr) => format!("({})", print_expr(expr)),
        Stmt::Print(expr) => format!("(print {})", print_expr(expr)),
        Stmt::VarDecl { name, initializer } => {
            let init = match initializer {
                Some(expr) => print_expr(expr),
                None => "nil".to_string(),
            };
            format!("(=var {} {})", name.lexeme, init)
        }
        Stmt::Block(statements) => {
            let inner: Vec<String> = statements.iter().map(print_stmt).collect();
            format!("(block {})", inner.join(" "))
        }
    }
}

/// Wraps `name` and the printed form of each of `exprs` in one set of
/// parens, space-separated.
fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({}", name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::parser::{parse_expression, parse_program};

    fn print(input: &str) -> String {
        let (tokens, _) = scan(input);
        let expr = parse_expression(tokens).unwrap();
        print_expr(&expr)
    }

    #[test]
    fn literal_nil_true_false() {
        assert_eq!(print("nil"), "nil");
        assert_eq!(print("true"), "true");
        assert_eq!(print("false"), "false");
    }

    #[test]
    fn literal_number_uses_canonical_text() {
        assert_eq!(print("42"), "42.0");
        assert_eq!(print("3.14"), "3.14");
    }

    #[test]
    fn literal_string_has_no_quotes() {
        assert_eq!(print(r#""hi""#), "hi");
    }

    #[test]
    fn grouping_wraps_in_group_form() {
        assert_eq!(print("(1)"), "(group 1.0)");
    }

    #[test]
    fn unary_uses_operator_lexeme() {
        assert_eq!(print("-1"), "(- 1.0)");
        assert_eq!(print("!true"), "(! true)");
    }

    #[test]
    fn spec_scenario_2_precedence_tree() {
        assert_eq!(print("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
    }

    #[test]
    fn variable_prints_its_name() {
        assert_eq!(print("x"), "x");
    }

    #[test]
    fn assignment_prints_equals_form() {
        assert_eq!(print("x = 1"), "(= x 1.0)");
    }

    #[test]
    fn statements_print_per_spec_table() {
        let (tokens, _) = scan("var x = 1; print x; { x; }");
        let (stmts, had_error) = parse_program(tokens);
        assert!(!had_error);
        assert_eq!(print_stmt(&stmts[0]), "(=var x 1.0)");
        assert_eq!(print_stmt(&stmts[1]), "(print x)");
        assert_eq!(print_stmt(&stmts[2]), "(block (x))");
    }

    #[test]
    fn var_decl_without_initializer_prints_nil() {
        let (tokens, _) = scan("var x;");
        let (stmts, _) = parse_program(tokens);
        assert_eq!(print_stmt(&stmts[0]), "(=var x nil)");
    }
}
