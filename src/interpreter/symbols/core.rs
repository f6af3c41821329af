use std::collections::HashMap;

use logos::Logos;

use crate::interpreter::{
    lexer::Token,
    symbols::builtin::{BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS},
};

/// A user-extensible unary real function.
pub type UnaryFn = Box<dyn Fn(f64) -> f64>;

/// Stores the three namespaces consulted during evaluation.
///
/// Constants are fixed once the table is built. Variables and functions can
/// be added or replaced, but a name never lives in more than one namespace:
/// every mutation checks the other two first.
///
/// ## Usage
///
/// A `SymbolTable` is owned by one
/// [`Engine`](crate::interpreter::engine::Engine). Independent engines never
/// share state.
pub struct SymbolTable {
    constants: HashMap<String, f64>,
    variables: HashMap<String, f64>,
    functions: HashMap<String, UnaryFn>,
}

impl SymbolTable {
    /// Creates a table seeded with the built-in constants and functions and
    /// no variables.
    #[must_use]
    pub fn new() -> Self {
        let constants = BUILTIN_CONSTANTS.iter()
                                         .map(|&(name, value)| (name.to_string(), value))
                                         .collect();
        let functions = BUILTIN_FUNCTIONS.iter()
                                         .map(|&(name, func)| {
                                             (name.to_string(), Box::new(func) as UnaryFn)
                                         })
                                         .collect();

        Self { constants,
               variables: HashMap::new(),
               functions }
    }

    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn function(&self, name: &str) -> Option<&UnaryFn> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    #[must_use]
    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Stores a variable value.
    ///
    /// Returns `false` without touching the table if `name` is not a valid
    /// identifier or is already taken by a constant or a function. An
    /// existing variable of the same name is overwritten.
    ///
    /// # Example
    /// ```
    /// use exprsolver::interpreter::symbols::core::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// assert!(table.set_variable("x1", 5.0));
    /// assert!(!table.set_variable("1x", 5.0));
    /// assert!(!table.set_variable("PI", 3.0));
    /// assert_eq!(table.variable("x1"), Some(5.0));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: f64) -> bool {
        if !is_valid_name(name) || self.is_constant(name) || self.is_function(name) {
            tracing::debug!(name, "rejected variable");
            return false;
        }

        self.variables.insert(name.to_string(), value);
        true
    }

    /// Registers a function, replacing any function of the same name.
    ///
    /// Returns `false` without touching the table if `name` is already taken
    /// by a constant or a variable.
    pub fn set_function<F>(&mut self, name: &str, func: F) -> bool
        where F: Fn(f64) -> f64 + 'static
    {
        if self.is_constant(name) || self.is_variable(name) {
            tracing::debug!(name, "rejected function");
            return false;
        }

        if self.functions.insert(name.to_string(), Box::new(func)).is_some() {
            tracing::debug!(name, "replaced function");
        }
        true
    }

    /// Lists variables as `name : value`, sorted by name.
    #[must_use]
    pub fn list_variables(&self) -> Vec<String> {
        format_entries(&self.variables)
    }

    /// Lists constants as `name : value`, sorted by name.
    #[must_use]
    pub fn list_constants(&self) -> Vec<String> {
        format_entries(&self.constants)
    }

    /// Lists function names, sorted.
    #[must_use]
    pub fn list_functions(&self) -> Vec<String> {
        let mut names = self.functions.keys().cloned().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
         .field("constants", &self.constants)
         .field("variables", &self.variables)
         .field("functions", &self.list_functions())
         .finish()
    }
}

/// Checks whether `name` can be used as a variable name.
///
/// A valid name starts with a letter and continues with letters or decimal
/// digits, which is exactly what the lexer reads as one identifier. Spaces
/// are not trimmed.
///
/// # Example
/// ```
/// use exprsolver::interpreter::symbols::core::is_valid_name;
///
/// assert!(is_valid_name("var1"));
/// assert!(!is_valid_name("1var"));
/// assert!(!is_valid_name("my_var"));
/// assert!(!is_valid_name("x "));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut lexer = Token::lexer(name);

    matches!(lexer.next(), Some(Ok(Token::Identifier(_)))) && lexer.span() == (0..name.len())
}

fn format_entries(entries: &HashMap<String, f64>) -> Vec<String> {
    let mut sorted = entries.iter().collect::<Vec<_>>();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
    sorted.into_iter()
          .map(|(name, value)| format!("{name} : {value:?}"))
          .collect()
}
