#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while executing a postfix sequence.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// Tried to raise a negative number to a power.
    NegativeBase {
        /// The rejected base.
        base: f64,
    },
    /// A term is neither an operator, constant, function, variable nor a
    /// number.
    UnknownToken {
        /// The offending lexeme.
        token: String,
    },
    /// An operator found too few operands, or the stack did not end with
    /// exactly one value.
    MalformedExpression,
    /// A function produced a value that is not a number.
    InvalidFunctionArgument,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::NegativeBase { base } => write!(f,
                                                  "Error: Cannot raise the negative number {base} to a power."),
            Self::UnknownToken { token } => write!(f, "Error: Unknown token '{token}'."),
            Self::MalformedExpression => write!(f, "Error: Operators are arranged incorrectly."),
            Self::InvalidFunctionArgument => {
                write!(f, "Error: Invalid function argument, the result is not a number.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
