//! # Operator Dispatch
//!
//! Applies a pending binary operator to its two operands. Evaluation is
//! strictly left to right: every operator press folds the running result
//! before the next operand is typed, so there is no precedence to resolve.

use std::fmt;

use crate::core::key::Operator;

/// The two ways a dispatch can fail. Neither is fatal: the calculator
/// shows its error token and waits for a digit or `CE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    /// Operand text that isn't a number (a lone `.`), or a result too
    /// large to show as one.
    MalformedNumber,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::MalformedNumber => write!(f, "malformed number"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Left operand and operator waiting for the right operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

impl PendingOperation {
    pub fn new(operand: f64, operator: Operator) -> Self {
        Self { operand, operator }
    }

    /// Complete the operation with its right operand.
    pub fn resolve(&self, rhs: f64) -> Result<f64, CalcError> {
        self.operator.apply(self.operand, rhs)
    }
}

impl Operator {
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if !result.is_finite() {
            return Err(CalcError::MalformedNumber);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic_operators() {
        assert_eq!(Operator::Add.apply(7.0, 8.0), Ok(15.0));
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), Ok(-2.0));
        assert_eq!(Operator::Multiply.apply(5.0, 4.0), Ok(20.0));
        assert_eq!(Operator::Divide.apply(9.0, 2.0), Ok(4.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(6.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        // Negative zero is still zero
        assert_eq!(
            Operator::Divide.apply(6.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_malformed() {
        assert_eq!(
            Operator::Multiply.apply(1e308, 10.0),
            Err(CalcError::MalformedNumber)
        );
    }

    #[test]
    fn test_pending_resolve() {
        let pending = PendingOperation::new(2.0, Operator::Add);
        assert_eq!(pending.resolve(3.0), Ok(5.0));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(CalcError::MalformedNumber.to_string(), "malformed number");
    }
}
