use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SequenceNumber;

pub trait Event: Serialize + DeserializeOwned {}

impl<T> Event for T where T: Serialize + DeserializeOwned {}

/// An event which has been applied onto an aggregate instance, as recorded in its journal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreEvent<E> {
    pub id: Uuid,
    pub aggregate_id: Uuid,
    pub payload: E,
    pub occurred_on: DateTime<Utc>,
    pub sequence_number: SequenceNumber,
}

impl<E> StoreEvent<E> {
    pub fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
