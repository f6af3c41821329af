//! # exprsolver
//!
//! exprsolver evaluates arithmetic expressions one line at a time.
//! It supports numeric literals, parentheses, the binary operators
//! `+ - * / ^`, unary minus, named constants, user-extensible unary
//! functions and a single `name=expression` assignment per line.
//!
//! Lines are tokenized, converted to postfix order with the shunting-yard
//! algorithm and executed on a stack machine.
//!
//! ```
//! use exprsolver::Engine;
//!
//! let mut engine = Engine::new();
//! engine.set_function("triple", |x| x * 3.0);
//!
//! assert_eq!(engine.evaluate("x=2 ^ 3"), Ok(8.0));
//! assert_eq!(engine.evaluate("triple(x) - 4"), Ok(20.0));
//! assert!(engine.evaluate("(-2)^3").is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the operators, postfix terms and statements.
///
/// This module declares the closed operator set with its priority table, the
/// `Term` type that makes up a postfix sequence, and the `Statement` type a
/// line is split into.
///
/// # Responsibilities
/// - Defines the operator set, including the unary minus sentinel.
/// - Provides the precedence ranks used by the converter.
/// - Renders postfix sequences for display.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while checking,
/// converting or evaluating a line, and the `ExpressionError` that wraps
/// them for callers.
///
/// # Responsibilities
/// - Defines error enums for both phases.
/// - Carries the offending name or token where there is one.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, conversion to postfix, evaluation and
/// the symbol tables, and exposes the [`Engine`] façade.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and symbol tables.
/// - Provides the entry point for evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::ExpressionError;
pub use interpreter::engine::Engine;
