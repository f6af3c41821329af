/// Highest priority in the precedence table.
///
/// Function names waiting on the operator stack and the unary minus sentinel
/// rank here, so any binary operator that follows flushes them to the output.
pub const MAX_PRIORITY: u8 = 4;

/// Represents an operator of the expression language.
///
/// The set is closed: the two parentheses, the five binary operators and the
/// unary minus sentinel. The parser synthesizes the sentinel when a `-` has
/// no left operand; a `_` written in the input spells it directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Opening parenthesis (`(`)
    LParen,
    /// Closing parenthesis (`)`)
    RParen,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Unary minus, rendered as `_`.
    Negate,
}

impl Operator {
    /// Returns the rank of the operator in the precedence table.
    ///
    /// Parentheses rank lowest so they are never flushed by an incoming
    /// operator.
    ///
    /// # Example
    /// ```
    /// use exprsolver::ast::Operator;
    ///
    /// assert!(Operator::Mul.priority() > Operator::Add.priority());
    /// assert_eq!(Operator::LParen.priority(), 0);
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::LParen | Self::RParen => 0,
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            Self::Negate => MAX_PRIORITY,
        }
    }

    /// The lexeme of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Negate => "_",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One element of a postfix (reverse Polish) sequence.
///
/// Operands keep their raw lexeme. Whether an operand names a constant, a
/// function, a variable or a number is decided when the sequence is
/// evaluated, against the symbol tables as they are at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An operator, including the unary minus sentinel.
    Operator(Operator),
    /// Any other lexeme.
    Operand(String),
}

impl Term {
    /// The lexeme this term was produced from.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Operator(op) => op.symbol(),
            Self::Operand(text) => text,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

/// Renders a postfix sequence as space separated lexemes.
///
/// # Example
/// ```
/// use exprsolver::ast::{Operator, Term, format_postfix};
///
/// let rpn = [Term::Operand("2".into()), Term::Operator(Operator::Negate)];
/// assert_eq!(format_postfix(&rpn), "2 _");
/// ```
#[must_use]
pub fn format_postfix(terms: &[Term]) -> String {
    terms.iter().map(Term::lexeme).collect::<Vec<_>>().join(" ")
}

/// One input line, split at its `=` sign.
///
/// Both variants borrow from the line they were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// A bare expression, e.g. `5 + var1`.
    Expression(&'a str),
    /// A single assignment, e.g. `var1=13 + 5`.
    Assignment {
        /// The target variable, exactly as written before the `=`.
        name:       &'a str,
        /// The right-hand side.
        expression: &'a str,
    },
}
