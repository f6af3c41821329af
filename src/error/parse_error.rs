#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation starts.
///
/// These cover the shape of the input line: parenthesis balance, the number
/// of `=` signs and the validity of an assignment target.
pub enum ParseError {
    /// Opening and closing parentheses do not match.
    MismatchedParentheses,
    /// The line contained nothing but `=` signs.
    InvalidExpression,
    /// More than one `=` appeared in a single line.
    TooManyAssignments {
        /// The number of `=` signs found.
        count: usize,
    },
    /// The assignment target is not a valid identifier.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// The assignment target is already registered as a function.
    FunctionNameCollision {
        /// The colliding name.
        name: String,
    },
    /// The assignment target is a built-in constant.
    ///
    /// Constants cannot be shadowed, so `PI=3` fails here instead of storing
    /// a variable that lookups would never reach.
    ConstantNameCollision {
        /// The colliding name.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => {
                write!(f, "Error: Mismatched opening and closing parentheses.")
            },
            Self::InvalidExpression => write!(f, "Error: Invalid expression."),
            Self::TooManyAssignments { count } => write!(f,
                                                         "Error: More than one assignment in a single line ({count} '=' found)."),
            Self::InvalidVariableName { name } => {
                write!(f, "Error: Invalid variable name '{name}'.")
            },
            Self::FunctionNameCollision { name } => write!(f,
                                                           "Error: Variable name '{name}' collides with a function."),
            Self::ConstantNameCollision { name } => write!(f,
                                                           "Error: Variable name '{name}' collides with a constant."),
        }
    }
}

impl std::error::Error for ParseError {}
