use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Division rejects a zero divisor. Exponentiation rejects any negative
    /// base, including bases with an integer exponent such as `(-2)^3`.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div` or `Pow`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use exprsolver::{
    ///     ast::Operator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(Operator::Sub, 5.0, 3.0), Ok(2.0));
    /// assert_eq!(Evaluator::eval_binary(Operator::Div, 1.0, 0.0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(-right + left),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            Operator::Pow => {
                if left < 0.0 {
                    return Err(RuntimeError::NegativeBase { base: left });
                }
                Ok(left.powf(right))
            },
            Operator::LParen | Operator::RParen | Operator::Negate => {
                Err(RuntimeError::MalformedExpression)
            },
        }
    }
}
