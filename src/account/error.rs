use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{ErrorKind, Kind};

/// The direction of a balance change, as named in error messages.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Deposit,
    Withdrawal,
}

impl Display for Movement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Movement::Deposit => write!(f, "Deposit"),
            Movement::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error("{movement} amount must be positive")]
    InvalidAmount { movement: Movement, amount: f64 },

    #[error("Insufficient funds")]
    InsufficientFunds { requested: f64, available: f64 },
}

impl AccountError {
    /// True for every rejected amount, insufficient funds included.
    pub fn is_invalid_amount(&self) -> bool {
        self.is(ErrorKind::InvalidAmount)
    }

    pub fn is_insufficient_funds(&self) -> bool {
        self.is(ErrorKind::InsufficientFunds)
    }
}

impl Kind for AccountError {
    fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            AccountError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
        }
    }
}
