/// The engine module is the public façade of the interpreter.
///
/// It splits a line into a bare expression or an assignment, runs the
/// parser and the evaluator, and commits assigned variables.
///
/// # Responsibilities
/// - Detects assignments and validates their target.
/// - Orchestrates conversion and evaluation.
/// - Exposes symbol table mutation and listing.
pub mod engine;
/// The evaluator module executes postfix sequences.
///
/// The evaluator runs a numeric stack machine over the postfix terms,
/// resolving names against the symbol tables as it goes, and reports runtime
/// errors such as division by zero or unknown tokens.
///
/// # Responsibilities
/// - Classifies each term at the moment it is executed.
/// - Applies operators and functions to the operand stack.
/// - Checks the final stack shape and value.
pub mod evaluator;
/// The lexer module tokenizes expression lines.
///
/// The lexer reads the raw text and produces numbers, identifiers, operators
/// and single stray characters. This is the first stage of interpretation and
/// it never fails.
pub mod lexer;
/// The parser module reorders tokens into postfix order.
///
/// The parser checks parenthesis balance, splits statements at `=` and runs
/// the shunting-yard conversion.
///
/// # Responsibilities
/// - Rejects unbalanced parentheses and malformed assignments.
/// - Resolves operator precedence, unary minus and function calls.
pub mod parser;
/// The symbols module holds constants, variables and functions.
///
/// # Responsibilities
/// - Seeds the built-in constants and functions.
/// - Keeps the three namespaces disjoint on every mutation.
/// - Formats the tables for display.
pub mod symbols;
