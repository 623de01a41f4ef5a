use serde::{Deserialize, Serialize};

use crate::account::error::Movement;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum AccountCommand {
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
}

impl AccountCommand {
    pub fn amount(&self) -> f64 {
        match self {
            AccountCommand::Deposit { amount } | AccountCommand::Withdraw { amount } => *amount,
        }
    }

    pub fn movement(&self) -> Movement {
        match self {
            AccountCommand::Deposit { .. } => Movement::Deposit,
            AccountCommand::Withdraw { .. } => Movement::Withdrawal,
        }
    }
}
