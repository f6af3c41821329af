use crate::{
    ast::{Operator, Term},
    error::RuntimeError,
    interpreter::{
        evaluator::classify::{Classified, classify},
        symbols::core::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A stack machine executing one postfix sequence.
///
/// ## Usage
///
/// An `Evaluator` borrows the symbol tables for the duration of one run and
/// is consumed by [`Evaluator::run`]. Every term is classified against the
/// tables at the moment it is executed.
pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
    stack:   Vec<f64>,
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols,
               stack: Vec::new() }
    }

    /// Executes a postfix sequence and returns its value.
    ///
    /// Operators pop their operands (the right operand first) and push one
    /// result. Constants, variables and numbers are pushed. A function pops
    /// one argument and pushes the function's value.
    ///
    /// # Errors
    /// - `MalformedExpression` if an operator finds too few operands, or the
    ///   stack does not hold exactly one value at the end.
    /// - `UnknownToken` for a term that resolves to nothing.
    /// - `DivisionByZero` and `NegativeBase` from the arithmetic operators.
    /// - `InvalidFunctionArgument` if a function result or the final value is
    ///   not a number.
    ///
    /// # Example
    /// ```
    /// use exprsolver::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     parser::core::parse_postfix,
    ///     symbols::core::SymbolTable,
    /// };
    ///
    /// let symbols = SymbolTable::new();
    /// let postfix = parse_postfix("(1 + 2) * 4").unwrap();
    ///
    /// assert_eq!(Evaluator::new(&symbols).run(&postfix), Ok(12.0));
    /// ```
    pub fn run(mut self, postfix: &[Term]) -> EvalResult<f64> {
        for term in postfix {
            self.step(term)?;
        }

        let value = match self.stack.as_slice() {
            [value] => *value,
            _ => return Err(RuntimeError::MalformedExpression),
        };

        if value.is_nan() {
            return Err(RuntimeError::InvalidFunctionArgument);
        }

        Ok(value)
    }

    fn step(&mut self, term: &Term) -> EvalResult<()> {
        let resolved = classify(term, self.symbols);
        tracing::trace!(term = %term, ?resolved, depth = self.stack.len(), "evaluating term");

        match resolved {
            Classified::Operator(op) => {
                let value = self.eval_operator(op)?;
                self.stack.push(value);
            },
            Classified::Constant(value) | Classified::Variable(value) | Classified::Literal(value) => {
                self.stack.push(value);
            },
            Classified::Function(func) => {
                let argument = self.pop()?;
                let value = func(argument);
                if value.is_nan() {
                    return Err(RuntimeError::InvalidFunctionArgument);
                }
                self.stack.push(value);
            },
            Classified::Unknown(token) => {
                return Err(RuntimeError::UnknownToken { token: token.to_string() });
            },
        }

        Ok(())
    }

    /// Pops one operand.
    ///
    /// An empty stack means an operator or function has nothing to work on.
    pub(in crate::interpreter::evaluator) fn pop(&mut self) -> EvalResult<f64> {
        self.stack.pop().ok_or(RuntimeError::MalformedExpression)
    }

    fn eval_operator(&mut self, op: Operator) -> EvalResult<f64> {
        match op {
            Operator::Negate => {
                let operand = self.pop()?;
                Ok(Self::eval_negate(operand))
            },
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => {
                let right = self.pop()?;
                let left = self.pop()?;
                Self::eval_binary(op, left, right)
            },
            // Balanced input never leaves a parenthesis in the output.
            Operator::LParen | Operator::RParen => Err(RuntimeError::MalformedExpression),
        }
    }
}

/// Evaluates a postfix sequence against the given symbol tables.
///
/// Shorthand for `Evaluator::new(symbols).run(postfix)`.
pub fn evaluate_postfix(postfix: &[Term], symbols: &SymbolTable) -> EvalResult<f64> {
    Evaluator::new(symbols).run(postfix)
}
