//! Property-based testing of the expression engine.
//!
//! Uses quickcheck to check:
//! - literal-only arithmetic against a reference evaluation
//! - idempotence of repeated evaluation
//! - robustness on arbitrary input

use exprsolver::{Engine, ExpressionError, error::RuntimeError};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

fn literal(g: &mut Gen) -> f64 {
    f64::from(u8::arbitrary(g) % 99 + 1)
}

fn apply(op: char, left: f64, right: f64) -> Option<f64> {
    match op {
        '+' => Some(left + right),
        '-' => Some(left - right),
        '*' => Some(left * right),
        '/' if right == 0.0 => None,
        '/' => Some(left / right),
        _ => unreachable!(),
    }
}

/// A fully parenthesized expression with its reference value.
///
/// `expected` is `None` when some division has a zero divisor.
#[derive(Clone, Debug)]
struct Nested {
    text:     String,
    expected: Option<f64>,
}

impl Nested {
    fn generate(g: &mut Gen, depth: usize) -> Self {
        if depth == 0 || u8::arbitrary(g) % 3 == 0 {
            let value = literal(g);
            return Self { text:     format!("{value}"),
                          expected: Some(value), };
        }

        let op = *g.choose(&OPERATORS).unwrap();
        let left = Self::generate(g, depth - 1);
        let right = Self::generate(g, depth - 1);
        let expected = match (left.expected, right.expected) {
            (Some(l), Some(r)) => apply(op, l, r),
            _ => None,
        };

        Self { text: format!("({} {op} {})", left.text, right.text),
               expected }
    }
}

impl Arbitrary for Nested {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(4);
        Self::generate(g, depth)
    }
}

/// An unparenthesized chain such as `3 + 4 * 2 - 7 / 5`.
#[derive(Clone, Debug)]
struct Flat {
    text:     String,
    expected: f64,
}

impl Arbitrary for Flat {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 6 + 1;
        let values = (0..count).map(|_| literal(g)).collect::<Vec<_>>();
        let ops = (1..count).map(|_| *g.choose(&OPERATORS).unwrap())
                            .collect::<Vec<_>>();

        let mut text = format!("{}", values[0]);
        for (op, value) in ops.iter().zip(&values[1..]) {
            text.push_str(&format!(" {op} {value}"));
        }

        // Multiplicative runs first, then additive ones, both left to right.
        let mut terms = vec![values[0]];
        let mut additive = Vec::new();
        for (&op, &value) in ops.iter().zip(&values[1..]) {
            if op == '*' || op == '/' {
                let last = terms.pop().unwrap();
                terms.push(apply(op, last, value).unwrap());
            } else {
                additive.push(op);
                terms.push(value);
            }
        }
        let expected = additive.iter()
                               .zip(&terms[1..])
                               .fold(terms[0], |acc, (&op, &value)| apply(op, acc, value).unwrap());

        Self { text, expected }
    }
}

#[test]
fn nested_literal_arithmetic_matches_reference() {
    fn prop(expr: Nested) -> TestResult {
        let result = Engine::new().evaluate(&expr.text);
        match expr.expected {
            Some(value) if value.is_nan() => TestResult::discard(),
            Some(value) => TestResult::from_bool(result == Ok(value)),
            None => {
                TestResult::from_bool(result
                                      == Err(ExpressionError::Runtime(RuntimeError::DivisionByZero)))
            },
        }
    }

    QuickCheck::new().tests(300)
                     .quickcheck(prop as fn(Nested) -> TestResult);
}

#[test]
fn precedence_matches_reference() {
    fn prop(expr: Flat) -> bool {
        Engine::new().evaluate(&expr.text) == Ok(expr.expected)
    }

    QuickCheck::new().tests(300).quickcheck(prop as fn(Flat) -> bool);
}

#[test]
fn evaluation_is_idempotent() {
    fn prop(expr: Flat, value: u8) -> bool {
        let mut engine = Engine::new();
        engine.set_variable("v", f64::from(value));
        let line = format!("{} - v", expr.text);

        let first = engine.evaluate(&line);
        let second = engine.evaluate(&line);
        first == second && engine.list_variables() == [format!("v : {:?}", f64::from(value))]
    }

    QuickCheck::new().tests(200)
                     .quickcheck(prop as fn(Flat, u8) -> bool);
}

#[test]
fn arbitrary_input_never_panics() {
    fn prop(input: String) -> bool {
        let mut engine = Engine::new();
        let _ = engine.evaluate(&input);
        let _ = engine.to_postfix(&input);
        true
    }

    QuickCheck::new().tests(500)
                     .quickcheck(prop as fn(String) -> bool);
}
