use std::fmt::Debug;

use uuid::Uuid;

use crate::event::StoreEvent;
use crate::SequenceNumber;

/// The internal state of an aggregate instance, along with its id and the sequence number of the
/// last applied event.
#[derive(Debug, Clone)]
pub struct AggregateState<S: Default + Debug + Clone> {
    id: Uuid,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S: Default + Debug + Clone> Default for AggregateState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Default + Debug + Clone> AggregateState<S> {
    /// Creates a new instance of an `AggregateState` with a random id and a default inner state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: impl Into<Uuid>) -> Self {
        Self::with_state(id, S::default())
    }

    pub fn with_state(id: impl Into<Uuid>, inner: S) -> Self {
        Self {
            id: id.into(),
            sequence_number: 0,
            inner,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Increments the sequence number and returns it.
    pub(crate) fn next_sequence_number(&mut self) -> SequenceNumber {
        self.sequence_number += 1;
        self.sequence_number
    }

    /// Applies a single event onto the inner state.
    pub(crate) fn apply<T, F>(&mut self, payload: T, function: F)
    where
        F: FnOnce(S, T) -> S,
    {
        let inner: S = std::mem::take(&mut self.inner);
        self.inner = function(inner, payload);
    }

    /// Applies a list of store events onto the state, by order of their sequence number. The
    /// resulting sequence number is the highest one among the given events.
    pub fn apply_store_events<T, F>(self, mut store_events: Vec<StoreEvent<T>>, function: F) -> Self
    where
        F: Fn(S, T) -> S,
    {
        store_events.sort_by_key(|store_event| store_event.sequence_number);

        store_events.into_iter().fold(self, |state, store_event| {
            let sequence_number: SequenceNumber = store_event.sequence_number.max(state.sequence_number);
            Self {
                inner: function(state.inner, store_event.payload),
                sequence_number,
                ..state
            }
        })
    }
}
