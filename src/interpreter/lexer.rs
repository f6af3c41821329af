use logos::Logos;

use crate::ast::{Operator, Term};

/// Represents a lexical token of an expression line.
///
/// Only the lexeme is kept for numbers and identifiers; what a name refers to
/// is decided later against the symbol tables. Spaces are skipped, every
/// other character that does not start a number or an identifier becomes a
/// one character token of its own.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of digits and dots starting with a digit, such as `3.14`.
    ///
    /// The run is not validated here, so `1.2.3` is a single token.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// A letter followed by letters or decimal digits, such as `var1` or
    /// `cos`. Digits of any script count, so `x٣` is one identifier.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `_`, a negation written out directly.
    #[token("_")]
    Underscore,
    /// Any other single character, tabs included.
    #[regex(r"[^0-9\p{L} ]", |lex| lex.slice().to_string(), priority = 1)]
    Symbol(String),
    /// Plain spaces.
    #[token(" ", logos::skip)]
    Space,
}

impl Token {
    /// Returns the operator this token spells, if any.
    ///
    /// `-` always maps to subtraction here; the converter decides whether it
    /// is a negation.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::LParen => Some(Operator::LParen),
            Self::RParen => Some(Operator::RParen),
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Caret => Some(Operator::Pow),
            Self::Underscore => Some(Operator::Negate),
            Self::Number(_) | Self::Identifier(_) | Self::Symbol(_) | Self::Space => None,
        }
    }

    /// The source text of the token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Number(text) | Self::Identifier(text) | Self::Symbol(text) => text,
            Self::Space => " ",
            other => other.as_operator().map_or("", Operator::symbol),
        }
    }

    /// Converts the token into a postfix operand carrying its lexeme.
    #[must_use]
    pub fn into_operand(self) -> Term {
        match self {
            Self::Number(text) | Self::Identifier(text) | Self::Symbol(text) => {
                Term::Operand(text)
            },
            other => Term::Operand(other.lexeme().to_string()),
        }
    }
}

/// Splits an expression line into tokens.
///
/// Tokenizing never fails. Malformed input, such as a number with two dots
/// or a stray character, is passed through and rejected during evaluation.
///
/// # Example
/// ```
/// use exprsolver::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize(" 13 / var1");
/// assert_eq!(tokens,
///            vec![Token::Number("13".into()),
///                 Token::Slash,
///                 Token::Identifier("var1".into())]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => tokens.push(Token::Symbol(lexer.slice().to_string())),
        }
    }

    tracing::debug!(source, count = tokens.len(), "tokenized expression");
    tokens
}
