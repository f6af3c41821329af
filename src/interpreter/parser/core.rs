use crate::{
    ast::{Operator, Term, format_postfix},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::utils::{Pending, check_parentheses, is_followed_by_paren, is_unary_position},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts a raw expression into postfix order.
///
/// This is the entry point of the parsing phase. The parenthesis balance is
/// verified on the raw text first, then the line is tokenized and converted.
///
/// # Errors
/// Returns `ParseError::MismatchedParentheses` if the parentheses do not
/// balance. Misplaced operators are not detected here; they surface when the
/// postfix sequence is evaluated.
///
/// # Example
/// ```
/// use exprsolver::{ast::format_postfix, interpreter::parser::core::parse_postfix};
///
/// let rpn = parse_postfix("13 / 2 * 5").unwrap();
/// assert_eq!(format_postfix(&rpn), "13 2 / 5 *");
/// ```
pub fn parse_postfix(source: &str) -> ParseResult<Vec<Term>> {
    check_parentheses(source)?;

    let tokens = tokenize(source);
    let postfix = to_postfix(&tokens);

    tracing::debug!(postfix = %format_postfix(&postfix), "converted to postfix");
    Ok(postfix)
}

/// Reorders an infix token sequence into postfix order (shunting-yard).
///
/// Operators of equal priority are left associative. A `-` at the start of
/// the line or right after `(` becomes the unary sentinel. A token that is
/// not an operator and is followed by `(` is treated as a function name: it
/// waits on the operator stack and is emitted after its argument.
///
/// The input is assumed to have balanced parentheses; see
/// [`parse_postfix`].
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Term> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let Some(op) = token.as_operator() else {
            if is_followed_by_paren(tokens, index) {
                stack.push(Pending::Call(token.lexeme().to_string()));
            } else {
                output.push(token.clone().into_operand());
            }
            continue;
        };

        let incoming = if op == Operator::Sub && is_unary_position(tokens, index) {
            Operator::Negate
        } else {
            op
        };

        // The comparison uses the priority of the written operator, even when
        // the unary sentinel is what ends up on the stack.
        match stack.last().map(Pending::priority) {
            Some(_) if op == Operator::RParen => {
                while let Some(entry) = stack.pop() {
                    if entry.is_open_paren() {
                        break;
                    }
                    output.push(entry.into_term());
                }
            },
            Some(top) if op != Operator::LParen && op.priority() <= top => {
                while let Some(entry) = stack.last() {
                    if op.priority() > entry.priority() {
                        break;
                    }
                    if let Some(entry) = stack.pop() {
                        output.push(entry.into_term());
                    }
                }
                stack.push(Pending::Operator(incoming));
            },
            _ => stack.push(Pending::Operator(incoming)),
        }
    }

    while let Some(entry) = stack.pop() {
        output.push(entry.into_term());
    }

    output
}
