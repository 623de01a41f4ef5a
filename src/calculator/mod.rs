use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use error::CalculatorError;

mod error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// A stateless four-function calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Real division: integral operands may still give a fractional result.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] if `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if b == 0.0 {
            tracing::debug!(dividend = a, "rejected division by zero");
            return Err(CalculatorError::DivisionByZero);
        }

        Ok(a / b)
    }

    /// Runs `a <operation> b`.
    pub fn evaluate(&self, operation: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match operation {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
