//! Two small, independent components:
//!
//! - [`Account`]: a bank account tracking its balance, built as a synchronous in-memory
//!   [`Aggregate`]: deposits and withdrawals are commands, validated against the current state and
//!   recorded as events in the account history.
//! - [`Calculator`]: a stateless four-function calculator.
//!
//! Amounts are plain `f64`; rounding errors are not corrected.

pub use crate::account::{Account, AccountError};
pub use crate::aggregate::Aggregate;
pub use crate::calculator::{Calculator, CalculatorError};
pub use crate::error::{ErrorKind, Kind};
pub use crate::event::{Event, StoreEvent};
pub use crate::state::AggregateState;

pub mod account;
pub mod calculator;
pub mod error;

mod aggregate;
mod event;
mod state;

pub type SequenceNumber = i32;
