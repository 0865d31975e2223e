//! End-to-end tests for the `evaluate` and `run` commands.

mod common;

use lak::driver;

fn evaluate(source: &str) -> (String, i32) {
    let mut out = Vec::new();
    let code = driver::evaluate(source, &mut out);
    (String::from_utf8(out).unwrap(), code)
}

fn run(source: &str) -> (String, i32) {
    let mut out = Vec::new();
    let code = driver::run(source, &mut out);
    (String::from_utf8(out).unwrap(), code)
}

#[test]
fn spec_scenario_3_evaluate_boolean_expression() {
    let (out, code) = evaluate("!(5 - 4 > 3 * 2 == !nil)");
    assert_eq!(out, "true\n");
    assert_eq!(code, 0);
}

#[test]
fn spec_scenario_4_run_sums_two_variables() {
    let (out, code) = run("var a = 1; var b = 2; print a + b;");
    assert_eq!(out, "3\n");
    assert_eq!(code, 0);
}

#[test]
fn spec_scenario_5_nested_block_shadowing() {
    let (out, code) = run(
        r#"{ var x = "outer"; { var x = "inner"; print x; } print x; }"#,
    );
    assert_eq!(out, "inner\nouter\n");
    assert_eq!(code, 0);
}

#[test]
fn spec_scenario_6_undefined_variable_is_runtime_error() {
    let (out, code) = run("print undefined;");
    assert_eq!(out, "");
    assert_eq!(code, driver::EXIT_SOFTWARE);
}

#[test]
fn evaluate_unary_minus_on_nil_is_runtime_error() {
    let (out, code) = evaluate("-nil");
    assert_eq!(out, "");
    assert_eq!(code, driver::EXIT_SOFTWARE);
}

#[test]
fn evaluate_string_plus_number_is_runtime_error() {
    let (out, code) = evaluate(r#""a" + 1"#);
    assert_eq!(out, "");
    assert_eq!(code, driver::EXIT_SOFTWARE);
}

#[test]
fn run_on_empty_program_is_a_no_op() {
    let (out, code) = run("");
    assert_eq!(out, "");
    assert_eq!(code, 0);
}

#[test]
fn run_no_implicit_value_printing_for_expression_statements() {
    let (out, code) = run("1 + 1;");
    assert_eq!(out, "");
    assert_eq!(code, 0);
}

#[test]
fn run_redeclaring_a_variable_in_the_same_scope_silently_overwrites() {
    let (out, code) = run("var x = 1; var x = 2; print x;");
    assert_eq!(out, "2\n");
    assert_eq!(code, 0);
}

#[test]
fn run_assignment_to_outer_scope_is_visible_after_block_exits() {
    let (out, code) = run("var x = 1; { x = 2; } print x;");
    assert_eq!(out, "2\n");
    assert_eq!(code, 0);
}
