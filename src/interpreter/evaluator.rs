/// Binary operator evaluation logic.
///
/// Handles addition, subtraction, multiplication, division and
/// exponentiation, including their domain checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the unary minus sentinel.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the postfix stack machine and the evaluator result type.
pub mod core;

/// Use-time classification of postfix terms.
///
/// Decides whether a term is an operator, constant, function, variable,
/// number or unknown, against the current symbol tables.
pub mod classify;
