use crate::{
    ast::{Statement, Term},
    error::{ExpressionError, ParseError},
    interpreter::{
        evaluator::core::evaluate_postfix,
        parser::{
            core::{ParseResult, parse_postfix},
            statement::parse_statement,
        },
        symbols::core::SymbolTable,
    },
};

/// Evaluates expression lines against its own symbol tables.
///
/// The engine is the entry point for callers: it accepts one line at a time,
/// either a bare expression or a single `name=expression` assignment, and
/// keeps assigned variables for later lines.
///
/// ## Usage
///
/// Create one engine per independent session. Engines share no state, and
/// one engine is meant to be driven from a single thread.
///
/// ```
/// use exprsolver::Engine;
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.evaluate("var1=13+5"), Ok(18.0));
/// assert_eq!(engine.evaluate("var1 / 2"), Ok(9.0));
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    symbols: SymbolTable,
}

impl Engine {
    /// Creates an engine with the built-in constants and functions and no
    /// variables.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::new() }
    }

    /// Evaluates one line.
    ///
    /// A bare expression is converted to postfix and evaluated. For an
    /// assignment the target is checked against the function and constant
    /// namespaces first; the variable is only written once the right-hand
    /// side has evaluated successfully.
    ///
    /// # Errors
    /// Any [`ParseError`] or
    /// [`RuntimeError`](crate::error::RuntimeError), wrapped in an
    /// [`ExpressionError`]. A failed line leaves the symbol tables untouched.
    ///
    /// # Example
    /// ```
    /// use exprsolver::{Engine, error::{ExpressionError, RuntimeError}};
    ///
    /// let mut engine = Engine::new();
    /// assert_eq!(engine.evaluate(" 3 "), Ok(3.0));
    /// assert_eq!(engine.evaluate("5/0"),
    ///            Err(ExpressionError::Runtime(RuntimeError::DivisionByZero)));
    /// ```
    pub fn evaluate(&mut self, line: &str) -> Result<f64, ExpressionError> {
        match parse_statement(line)? {
            Statement::Expression(expression) => self.calculate(expression),
            Statement::Assignment { name, expression } => {
                if self.symbols.is_function(name) {
                    return Err(ParseError::FunctionNameCollision { name: name.to_string() }.into());
                }
                if self.symbols.is_constant(name) {
                    return Err(ParseError::ConstantNameCollision { name: name.to_string() }.into());
                }

                let value = self.calculate(expression)?;
                if !self.symbols.set_variable(name, value) {
                    return Err(ParseError::InvalidVariableName { name: name.to_string() }.into());
                }

                tracing::debug!(name, value, "assigned variable");
                Ok(value)
            },
        }
    }

    /// Converts the expression part of a line into postfix order without
    /// evaluating it.
    ///
    /// For an assignment, the right-hand side is converted.
    ///
    /// # Errors
    /// Returns the [`ParseError`] that [`Engine::evaluate`] would report
    /// before evaluation starts.
    ///
    /// # Example
    /// ```
    /// use exprsolver::{Engine, ast::format_postfix};
    ///
    /// let engine = Engine::new();
    /// let rpn = engine.to_postfix("x=-(2 + 3) * 4").unwrap();
    /// assert_eq!(format_postfix(&rpn), "2 3 + _ 4 *");
    /// ```
    pub fn to_postfix(&self, line: &str) -> ParseResult<Vec<Term>> {
        match parse_statement(line)? {
            Statement::Expression(expression) | Statement::Assignment { expression, .. } => {
                parse_postfix(expression)
            },
        }
    }

    /// Stores a variable.
    ///
    /// Returns `false` if the name is not a valid identifier or belongs to a
    /// constant or function; the tables are then left unchanged.
    pub fn set_variable(&mut self, name: &str, value: f64) -> bool {
        self.symbols.set_variable(name, value)
    }

    /// Registers a unary function, replacing any function of the same name.
    ///
    /// Returns `false` if the name belongs to a constant or variable.
    ///
    /// # Example
    /// ```
    /// use exprsolver::Engine;
    ///
    /// let mut engine = Engine::new();
    /// assert!(engine.set_function("triple", |x| x * 3.0));
    /// assert_eq!(engine.evaluate("triple(13.3)"), Ok(13.3 * 3.0));
    /// ```
    pub fn set_function<F>(&mut self, name: &str, func: F) -> bool
        where F: Fn(f64) -> f64 + 'static
    {
        self.symbols.set_function(name, func)
    }

    /// Lists the variables as `name : value`.
    #[must_use]
    pub fn list_variables(&self) -> Vec<String> {
        self.symbols.list_variables()
    }

    /// Lists the function names.
    #[must_use]
    pub fn list_functions(&self) -> Vec<String> {
        self.symbols.list_functions()
    }

    /// Lists the constants as `name : value`.
    #[must_use]
    pub fn list_constants(&self) -> Vec<String> {
        self.symbols.list_constants()
    }

    fn calculate(&self, expression: &str) -> Result<f64, ExpressionError> {
        let postfix = parse_postfix(expression)?;
        Ok(evaluate_postfix(&postfix, &self.symbols)?)
    }
}
