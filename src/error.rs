/// Parsing errors.
///
/// Defines the errors detected before evaluation: unbalanced parentheses,
/// too many assignments and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the postfix sequence is
/// executed, such as division by zero or unknown tokens.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure produced by a call to
/// [`Engine::evaluate`](crate::interpreter::engine::Engine::evaluate).
pub enum ExpressionError {
    /// The line was rejected before evaluation.
    Parse(ParseError),
    /// Evaluation of the postfix sequence failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for ExpressionError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for ExpressionError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
