use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum AccountEvent {
    Deposited { amount: f64 },
    Withdrawn { amount: f64 },
}
