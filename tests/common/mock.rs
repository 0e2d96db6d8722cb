//! Mock Source and Destination for testing.
//!
//! `ScriptedSource` yields a fixed sequence and then either reports
//! exhaustion or a scripted extraction fault. `RecordingStore` keeps every
//! stored record for assertions and can be told to start failing after a
//! number of successful stores.

use relay_engine::capability::{Destination, Pulled, Source};
use relay_engine::error::{SourceError, StoreError};
use std::collections::VecDeque;

/// Source driven by a prepared list of records.
///
/// # Example
/// ```rust,ignore
/// let mut source = ScriptedSource::yielding(vec!["a", "b"]);
/// // pulls "a", "b", then Pulled::Exhausted
///
/// let mut faulty = ScriptedSource::faulting(vec!["a"], "link down");
/// // pulls "a", then Err(SourceError)
/// ```
pub struct ScriptedSource<R> {
    pending: VecDeque<R>,
    fault: Option<String>,
}

impl<R> ScriptedSource<R> {
    /// A source that yields `records` in order, then reports exhaustion.
    pub fn yielding(records: Vec<R>) -> Self {
        Self {
            pending: records.into(),
            fault: None,
        }
    }

    /// A source that yields `records` in order, then fails with `message`
    /// on every further pull.
    pub fn faulting(records: Vec<R>, message: &str) -> Self {
        Self {
            pending: records.into(),
            fault: Some(message.to_string()),
        }
    }

    /// Records not yet pulled.
    #[allow(dead_code)] // Useful for future tests
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl<R> Source for ScriptedSource<R> {
    type Record = R;

    fn pull(&mut self) -> Result<Pulled<R>, SourceError> {
        match self.pending.pop_front() {
            Some(record) => Ok(Pulled::Record(record)),
            None => match &self.fault {
                Some(message) => Err(SourceError::new(message.clone())),
                None => Ok(Pulled::Exhausted),
            },
        }
    }
}

/// Destination that records every store for assertions.
pub struct RecordingStore<R> {
    stored: Vec<R>,
    fail_after: usize,
}

impl<R> RecordingStore<R> {
    /// A store that accepts everything.
    pub fn new() -> Self {
        Self {
            stored: Vec::new(),
            fail_after: usize::MAX,
        }
    }

    /// Fail every store call after `n` successful ones.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = n;
    }

    /// Everything stored so far, in store order.
    pub fn stored(&self) -> &[R] {
        &self.stored
    }

    /// Count of stored records.
    #[allow(dead_code)] // Useful for future tests
    pub fn len(&self) -> usize {
        self.stored.len()
    }
}

impl<R> Default for RecordingStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Destination for RecordingStore<R> {
    type Record = R;

    fn store(&mut self, record: R) -> Result<(), StoreError> {
        if self.stored.len() >= self.fail_after {
            return Err(StoreError::new("simulated store failure"));
        }
        self.stored.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_yields_then_exhausts() {
        let mut source = ScriptedSource::yielding(vec![1, 2]);

        assert_eq!(source.pull().unwrap(), Pulled::Record(1));
        assert_eq!(source.pull().unwrap(), Pulled::Record(2));
        assert!(source.pull().unwrap().is_exhausted());
        // Stays exhausted
        assert!(source.pull().unwrap().is_exhausted());
    }

    #[test]
    fn test_scripted_source_faults_after_records() {
        let mut source = ScriptedSource::faulting(vec![1], "link down");

        assert_eq!(source.pull().unwrap(), Pulled::Record(1));
        let err = source.pull().unwrap_err();
        assert_eq!(err.message(), "link down");
        // Keeps faulting
        assert!(source.pull().is_err());
    }

    #[test]
    fn test_recording_store_fail_after() {
        let mut store = RecordingStore::new();
        store.fail_after(2);

        assert!(store.store("a").is_ok());
        assert!(store.store("b").is_ok());
        assert!(store.store("c").is_err());
        assert_eq!(store.stored(), ["a", "b"]);
    }
}
