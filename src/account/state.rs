use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct AccountState {
    pub balance: f64,
}

impl AccountState {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    pub fn add_amount(self, amount: f64) -> Self {
        Self {
            balance: self.balance + amount,
        }
    }

    pub fn sub_amount(self, amount: f64) -> Self {
        Self {
            balance: self.balance - amount,
        }
    }
}
