use std::fs;

use exprsolver::{
    Engine, ExpressionError,
    error::{ParseError, RuntimeError},
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut engine = Engine::new();
        for (number, case) in parse_cases(&content) {
            count += 1;
            let result = engine.evaluate(&case.input);
            if !case.expected.matches(&result) {
                panic!("Case on line {} in {:?} failed:\n{}\nExpected: {:?}\nGot: {:?}",
                       number, path, case.input, case.expected, result);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}

#[derive(Debug)]
enum Expected {
    Value(f64),
    Error(String),
}

impl Expected {
    fn matches(&self, result: &Result<f64, ExpressionError>) -> bool {
        match (self, result) {
            (Self::Value(expected), Ok(value)) => (expected - value).abs() <= 1e-9 * expected.abs().max(1.0),
            (Self::Error(kind), Err(e)) => error_kind(e) == kind,
            _ => false,
        }
    }
}

struct Case {
    input:    String,
    expected: Expected,
}

/// Reads `input => expected` lines. Blank lines and `#` comments are skipped.
fn parse_cases(content: &str) -> Vec<(usize, Case)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (input, expected) = line.rsplit_once("=>")
                                           .unwrap_or_else(|| panic!("Missing '=>' on line {}", i + 1));
               let expected = expected.trim();
               let expected = match expected.strip_prefix("error:") {
                   Some(kind) => Expected::Error(kind.trim().to_string()),
                   None => Expected::Value(expected.parse()
                                                   .unwrap_or_else(|_| panic!("Bad value on line {}", i + 1))),
               };
               (i + 1, Case { input: input.trim_end().to_string(),
                              expected })
           })
           .collect()
}

fn error_kind(e: &ExpressionError) -> &'static str {
    match e {
        ExpressionError::Parse(ParseError::MismatchedParentheses) => "parentheses",
        ExpressionError::Parse(ParseError::InvalidExpression) => "invalid expression",
        ExpressionError::Parse(ParseError::TooManyAssignments { .. }) => "assignments",
        ExpressionError::Parse(ParseError::InvalidVariableName { .. }) => "variable name",
        ExpressionError::Parse(ParseError::FunctionNameCollision { .. }) => "function name",
        ExpressionError::Parse(ParseError::ConstantNameCollision { .. }) => "constant name",
        ExpressionError::Runtime(RuntimeError::DivisionByZero) => "division by zero",
        ExpressionError::Runtime(RuntimeError::NegativeBase { .. }) => "negative base",
        ExpressionError::Runtime(RuntimeError::UnknownToken { .. }) => "unknown token",
        ExpressionError::Runtime(RuntimeError::MalformedExpression) => "malformed",
        ExpressionError::Runtime(RuntimeError::InvalidFunctionArgument) => "invalid argument",
    }
}

#[test]
fn evaluates_mixed_expression() {
    let mut engine = Engine::new();
    let expected = 5f64.powf(2.1) + 4.65 / 3.0 * (7.0 / (std::f64::consts::PI / 3.0).sin());
    assert_eq!(engine.evaluate("5^2.1 + 4.65/3 *(7/sin(PI/3))"), Ok(expected));
}

#[test]
fn whitespace_is_ignored() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("3"), Ok(3.0));
    assert_eq!(engine.evaluate(" 3 "), Ok(3.0));
    assert_eq!(engine.evaluate("13    /  2  *5"), Ok(32.5));
}

#[test]
fn assignment_and_reuse() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("var1=13+5"), Ok(18.0));
    assert_eq!(engine.evaluate("var1"), Ok(18.0));
    assert_eq!(engine.evaluate("5+var1/3*cos(var1)"), Ok(5.0 + 18.0 / 3.0 * 18f64.cos()));
}

#[test]
fn user_defined_function() {
    let mut engine = Engine::new();
    assert!(engine.set_function("triple", |a| a * 3.0));
    assert_eq!(engine.evaluate("triple(13.3)"), Ok(13.3 * 3.0));
}

#[test]
fn variable_set_from_outside() {
    let mut engine = Engine::new();
    assert!(engine.set_variable("var1", 1.2f64.tan()));
    assert_eq!(engine.evaluate("var1"), Ok(1.2f64.tan()));
}

#[test]
fn invalid_variable_name_is_rejected() {
    let mut engine = Engine::new();
    assert!(!engine.set_variable("1x", 5.0));
    assert!(engine.list_variables().is_empty());
}

#[test]
fn division_by_zero_is_error() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("5/0"),
               Err(ExpressionError::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn negative_base_is_error() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("(-2)^3"),
               Err(ExpressionError::Runtime(RuntimeError::NegativeBase { base: -2.0 })));
}

#[test]
fn mismatched_parentheses_is_error() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("(2+3"),
               Err(ExpressionError::Parse(ParseError::MismatchedParentheses)));
}

#[test]
fn too_many_assignments_is_error() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("a=1=2"),
               Err(ExpressionError::Parse(ParseError::TooManyAssignments { count: 2 })));
    assert!(engine.list_variables().is_empty());
}

#[test]
fn redefining_function_changes_later_results() {
    let mut engine = Engine::new();
    assert_eq!(engine.evaluate("sin(0)"), Ok(0.0));
    assert!(engine.set_function("sin", |_| 7.0));
    assert_eq!(engine.evaluate("sin(0)"), Ok(7.0));
}

#[test]
fn engines_do_not_share_state() {
    let mut first = Engine::new();
    let mut second = Engine::new();
    first.evaluate("x=1").unwrap();
    assert!(second.evaluate("x").is_err());
}

#[test]
fn listings() {
    let mut engine = Engine::new();
    engine.evaluate("b=2").unwrap();
    engine.evaluate("a=1").unwrap();
    assert_eq!(engine.list_variables(), ["a : 1.0", "b : 2.0"]);
    assert_eq!(engine.list_functions(), ["cos", "log", "log10", "sin", "tan"]);
    assert_eq!(engine.list_constants().len(), 2);
}

#[test]
fn errors_render_a_message() {
    let mut engine = Engine::new();
    let message = engine.evaluate("1 + foo").unwrap_err().to_string();
    assert!(message.contains("foo"), "{message}");
}
