use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use aggregate::BankAccount;
pub use command::AccountCommand;
pub use config::AccountConfig;
pub use error::{AccountError, Movement};
pub use event::AccountEvent;
pub use state::AccountState;

use crate::{Aggregate, AggregateState, SequenceNumber, StoreEvent};

mod aggregate;
mod command;
mod config;
mod error;
mod event;
mod state;

/// A single bank account, tracking its balance in memory.
///
/// Every accepted deposit or withdrawal is recorded in the account history, so that the balance can
/// always be explained by (and rebuilt from) the initial balance and the recorded events.
#[derive(Debug, Clone)]
pub struct Account {
    state: AggregateState<AccountState>,
    history: Vec<StoreEvent<AccountEvent>>,
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl Account {
    /// Opens an account with a zero balance.
    pub fn new() -> Self {
        Self::with_config(AccountConfig::default())
    }

    pub fn with_initial_balance(initial_balance: f64) -> Self {
        Self::with_config(AccountConfig::builder().initial_balance(initial_balance).build())
    }

    pub fn with_config(config: AccountConfig) -> Self {
        Self {
            state: AggregateState::with_state(config.id, AccountState::new(config.initial_balance)),
            history: vec![],
        }
    }

    /// Rebuilds an account from its initial balance and its history, applying events by order of their
    /// sequence number. Events recorded for other accounts are ignored.
    pub fn replay(id: impl Into<Uuid>, initial_balance: f64, mut events: Vec<StoreEvent<AccountEvent>>) -> Self {
        let id: Uuid = id.into();

        events.retain(|event| {
            let owned = event.aggregate_id == id;
            if !owned {
                tracing::debug!({
                    event_id = %event.id,
                    aggregate_id = %event.aggregate_id,
                    account_id = %id,
                }, "skipping event recorded for another account");
            }
            owned
        });
        events.sort_by_key(|event| event.sequence_number);

        let state = AggregateState::with_state(id, AccountState::new(initial_balance))
            .apply_store_events(events.clone(), BankAccount::apply_event);

        Self { state, history: events }
    }

    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        self.handle_command(AccountCommand::Deposit { amount })
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        self.handle_command(AccountCommand::Withdraw { amount })
    }

    /// Validates the command against the current balance and applies the resulting events. On error
    /// nothing is applied.
    #[tracing::instrument(skip_all, fields(aggregate_id = %self.state.id(), aggregate = BankAccount::NAME), err(level = "debug"))]
    pub fn handle_command(&mut self, command: AccountCommand) -> Result<(), AccountError> {
        let events: Vec<AccountEvent> = BankAccount::handle_command(self.state.inner(), command)?;
        let occurred_on: DateTime<Utc> = Utc::now();

        for event in events {
            let store_event: StoreEvent<AccountEvent> = StoreEvent {
                id: Uuid::new_v4(),
                aggregate_id: *self.state.id(),
                payload: event,
                occurred_on,
                sequence_number: self.state.next_sequence_number(),
            };

            let span = tracing::trace_span!(
                "tally.apply_event",
                event_id = %store_event.id,
                sequence_number = store_event.sequence_number
            );
            let _e = span.enter();

            self.state.apply(event, BankAccount::apply_event);
            tracing::trace!(balance = self.state.inner().balance, "event applied");

            self.history.push(store_event);
        }

        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.state.inner().balance
    }

    pub fn id(&self) -> &Uuid {
        self.state.id()
    }

    pub fn sequence_number(&self) -> SequenceNumber {
        *self.state.sequence_number()
    }

    pub fn state(&self) -> &AggregateState<AccountState> {
        &self.state
    }

    /// The events applied to this account, oldest first.
    pub fn history(&self) -> &[StoreEvent<AccountEvent>] {
        &self.history
    }
}
