use crate::{
    ast::{MAX_PRIORITY, Operator, Term},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Checks that the parentheses of a raw expression line are balanced.
///
/// The running depth must never drop below zero and must end at zero.
///
/// # Errors
/// Returns `ParseError::MismatchedParentheses` otherwise.
///
/// # Example
/// ```
/// use exprsolver::interpreter::parser::utils::check_parentheses;
///
/// assert!(check_parentheses("(1 + (2))").is_ok());
/// assert!(check_parentheses("(2+3").is_err());
/// assert!(check_parentheses(")(").is_err());
/// ```
pub fn check_parentheses(source: &str) -> ParseResult<()> {
    let mut depth: usize = 0;

    for c in source.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)
                             .ok_or(ParseError::MismatchedParentheses)?;
            },
            _ => {},
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::MismatchedParentheses)
    }
}

/// An entry of the operator stack used during conversion.
///
/// Besides operators, the stack holds names that are immediately followed by
/// `(`, so the name reaches the output right after its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::interpreter::parser) enum Pending {
    Operator(Operator),
    Call(String),
}

impl Pending {
    /// Function calls rank like the unary sentinel, above every binary
    /// operator.
    pub(in crate::interpreter::parser) const fn priority(&self) -> u8 {
        match self {
            Self::Operator(op) => op.priority(),
            Self::Call(_) => MAX_PRIORITY,
        }
    }

    pub(in crate::interpreter::parser) const fn is_open_paren(&self) -> bool {
        matches!(self, Self::Operator(Operator::LParen))
    }

    pub(in crate::interpreter::parser) fn into_term(self) -> Term {
        match self {
            Self::Operator(op) => Term::Operator(op),
            Self::Call(name) => Term::Operand(name),
        }
    }
}

/// Decides whether a `-` at `index` has no left operand.
///
/// That is the case at the very start of the line and directly after `(`.
pub(in crate::interpreter::parser) fn is_unary_position(tokens: &[Token], index: usize) -> bool {
    index == 0 || matches!(tokens.get(index - 1), Some(Token::LParen))
}

/// Decides whether the token at `index` is directly followed by `(`.
pub(in crate::interpreter::parser) fn is_followed_by_paren(tokens: &[Token], index: usize) -> bool {
    matches!(tokens.get(index + 1), Some(Token::LParen))
}
