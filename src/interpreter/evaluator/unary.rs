use crate::interpreter::evaluator::core::Evaluator;

impl Evaluator<'_> {
    /// Evaluates the unary minus sentinel.
    ///
    /// # Example
    /// ```
    /// use exprsolver::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_negate(4.0), -4.0);
    /// ```
    #[must_use]
    pub const fn eval_negate(operand: f64) -> f64 {
        -operand
    }
}
