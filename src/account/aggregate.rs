use crate::account::command::AccountCommand;
use crate::account::error::{AccountError, Movement};
use crate::account::event::AccountEvent;
use crate::account::state::AccountState;
use crate::Aggregate;

const BANK_ACCOUNT: &str = "bank_account";

pub struct BankAccount;

impl Aggregate for BankAccount {
    const NAME: &'static str = BANK_ACCOUNT;
    type State = AccountState;
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = AccountError;

    // Zero amounts pass validation but emit nothing.
    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::Deposit { amount } if amount < 0.0 => Err(AccountError::InvalidAmount {
                movement: Movement::Deposit,
                amount,
            }),
            AccountCommand::Deposit { amount } if amount == 0.0 => Ok(vec![]),
            AccountCommand::Deposit { amount } => Ok(vec![AccountEvent::Deposited { amount }]),
            AccountCommand::Withdraw { amount } if amount < 0.0 => Err(AccountError::InvalidAmount {
                movement: Movement::Withdrawal,
                amount,
            }),
            AccountCommand::Withdraw { amount } if amount > state.balance => Err(AccountError::InsufficientFunds {
                requested: amount,
                available: state.balance,
            }),
            AccountCommand::Withdraw { amount } if amount == 0.0 => Ok(vec![]),
            AccountCommand::Withdraw { amount } => Ok(vec![AccountEvent::Withdrawn { amount }]),
        }
    }

    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State {
        match payload {
            AccountEvent::Deposited { amount } => state.add_amount(amount),
            AccountEvent::Withdrawn { amount } => state.sub_amount(amount),
        }
    }
}
