use crate::{
    ast::{Operator, Term},
    interpreter::symbols::core::{SymbolTable, UnaryFn},
};

/// What a postfix term resolves to at the moment it is executed.
pub enum Classified<'a> {
    Operator(Operator),
    Constant(f64),
    Function(&'a UnaryFn),
    Variable(f64),
    Literal(f64),
    Unknown(&'a str),
}

impl std::fmt::Debug for Classified<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "Operator({op})"),
            Self::Constant(value) => write!(f, "Constant({value})"),
            Self::Function(_) => write!(f, "Function"),
            Self::Variable(value) => write!(f, "Variable({value})"),
            Self::Literal(value) => write!(f, "Literal({value})"),
            Self::Unknown(token) => write!(f, "Unknown({token})"),
        }
    }
}

/// Resolves a term against the symbol tables.
///
/// Operands are looked up as a constant first, then as a function, then as
/// a variable. A lexeme that starts with a digit is finally parsed as a
/// number. Anything else is unknown.
///
/// Nothing is cached: the same lexeme may resolve differently after the
/// tables change.
pub fn classify<'a>(term: &'a Term, symbols: &'a SymbolTable) -> Classified<'a> {
    let text = match term {
        Term::Operator(op) => return Classified::Operator(*op),
        Term::Operand(text) => text.as_str(),
    };

    if let Some(value) = symbols.constant(text) {
        Classified::Constant(value)
    } else if let Some(func) = symbols.function(text) {
        Classified::Function(func)
    } else if let Some(value) = symbols.variable(text) {
        Classified::Variable(value)
    } else if let Some(value) = parse_literal(text) {
        Classified::Literal(value)
    } else {
        Classified::Unknown(text)
    }
}

/// Parses a numeric lexeme.
///
/// Only lexemes starting with an ASCII digit qualify, which keeps words like
/// `inf` or `nan` out of the number space.
fn parse_literal(text: &str) -> Option<f64> {
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}
