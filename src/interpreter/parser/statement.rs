use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{parser::core::ParseResult, symbols::core::is_valid_name},
};

/// Parses a single input line into a statement.
///
/// The line is split at every `=`. Without any `=` the whole line is an
/// expression. Otherwise trailing empty segments are dropped, so `x=` reads
/// as the expression `x`. What remains must be one segment (an expression)
/// or two (an assignment).
///
/// The assignment target must be a well formed identifier exactly as written,
/// surrounding spaces included; collisions with functions or constants are
/// checked by the engine.
///
/// # Errors
/// - `InvalidExpression` if nothing but `=` signs is left.
/// - `InvalidVariableName` if the assignment target is not an identifier.
/// - `TooManyAssignments` for more than one assignment.
///
/// # Example
/// ```
/// use exprsolver::{ast::Statement, interpreter::parser::statement::parse_statement};
///
/// assert_eq!(parse_statement("13 + 5"), Ok(Statement::Expression("13 + 5")));
/// assert_eq!(parse_statement("var1=13+5"),
///            Ok(Statement::Assignment { name:       "var1",
///                                       expression: "13+5", }));
/// ```
pub fn parse_statement(line: &str) -> ParseResult<Statement<'_>> {
    if !line.contains('=') {
        return Ok(Statement::Expression(line));
    }

    let mut segments = line.split('=').collect::<Vec<_>>();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    match segments[..] {
        [] => Err(ParseError::InvalidExpression),
        [expression] => Ok(Statement::Expression(expression)),
        [name, expression] => {
            if !is_valid_name(name) {
                return Err(ParseError::InvalidVariableName { name: name.to_string() });
            }
            Ok(Statement::Assignment { name,
                                       expression })
        },
        _ => Err(ParseError::TooManyAssignments { count: line.matches('=').count() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_without_equals_are_expressions() {
        assert_eq!(parse_statement(""), Ok(Statement::Expression("")));
        assert_eq!(parse_statement(" 3 "), Ok(Statement::Expression(" 3 ")));
    }

    #[test]
    fn target_is_not_trimmed() {
        assert_eq!(parse_statement("x = 5"),
                   Err(ParseError::InvalidVariableName { name: "x ".into() }));
        assert_eq!(parse_statement(" x=5"),
                   Err(ParseError::InvalidVariableName { name: " x".into() }));
        assert_eq!(parse_statement("x= 5"),
                   Ok(Statement::Assignment { name:       "x",
                                              expression: " 5", }));
    }

    #[test]
    fn trailing_empty_segments_are_dropped() {
        assert_eq!(parse_statement("x="), Ok(Statement::Expression("x")));
        assert_eq!(parse_statement("x=y=="),
                   Ok(Statement::Assignment { name:       "x",
                                              expression: "y", }));
    }

    #[test]
    fn only_equals_is_invalid() {
        assert_eq!(parse_statement("="), Err(ParseError::InvalidExpression));
        assert_eq!(parse_statement("==="), Err(ParseError::InvalidExpression));
    }

    #[test]
    fn bad_targets_are_rejected() {
        assert_eq!(parse_statement("1x=5"),
                   Err(ParseError::InvalidVariableName { name: "1x".into() }));
        assert_eq!(parse_statement("=5"),
                   Err(ParseError::InvalidVariableName { name: String::new() }));
        assert_eq!(parse_statement("a b=5"),
                   Err(ParseError::InvalidVariableName { name: "a b".into() }));
    }

    #[test]
    fn more_than_one_assignment() {
        assert_eq!(parse_statement("a=1=2"), Err(ParseError::TooManyAssignments { count: 2 }));
        assert_eq!(parse_statement("=1=2"), Err(ParseError::TooManyAssignments { count: 2 }));
    }
}
