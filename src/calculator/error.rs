use thiserror::Error;

use crate::error::{ErrorKind, Kind};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl Kind for CalculatorError {
    fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}
