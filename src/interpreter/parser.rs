/// Conversion of infix token sequences into postfix order.
///
/// Implements the shunting-yard algorithm over the priority table, including
/// the unary minus and function call rules.
pub mod core;

/// Helpers shared by the converter.
///
/// Provides the parenthesis balance check and the lookups used to tell unary
/// minus and function names apart from their ordinary counterparts.
pub mod utils;

/// Statement parsing.
///
/// Splits a line at its `=` sign into a bare expression or a single
/// assignment and validates the assignment target.
pub mod statement;
