// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! In-memory capability implementations for testing/standalone mode.
//!
//! [`VecSource`] yields the records of a vector in order, then exhaustion;
//! [`VecStore`] collects everything stored into it. They carry no transport
//! or persistence; production callers plug in their own capability
//! implementations.
//!
//! # Example
//!
//! ```rust
//! use relay_engine::mem::{VecSource, VecStore};
//! use relay_engine::{RelayConfig, RelayEngine};
//!
//! let mut engine = RelayEngine::new(RelayConfig::for_testing()).unwrap();
//! let mut store = VecStore::new();
//!
//! let report = engine.run(VecSource::new(vec![1, 2, 3]), &mut store);
//!
//! assert!(report.is_complete());
//! assert_eq!(store.records(), [1, 2, 3]);
//! ```

use crate::capability::{Destination, Pulled, Source};
use crate::error::{SourceError, StoreError};
use std::collections::VecDeque;

/// Source backed by a vector of records.
#[derive(Debug, Clone)]
pub struct VecSource<R> {
    pending: VecDeque<R>,
}

impl<R> VecSource<R> {
    /// A source yielding `records` in order, then exhaustion.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            pending: records.into(),
        }
    }

    /// Records not yet pulled.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl<R> Source for VecSource<R> {
    type Record = R;

    fn pull(&mut self) -> Result<Pulled<R>, SourceError> {
        Ok(match self.pending.pop_front() {
            Some(record) => Pulled::Record(record),
            None => Pulled::Exhausted,
        })
    }
}

/// Destination that appends every stored record to a vector.
#[derive(Debug, Clone)]
pub struct VecStore<R> {
    records: Vec<R>,
}

impl<R> VecStore<R> {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Everything stored so far, in store order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Count of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the store, returning the stored records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> Default for VecStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Destination for VecStore<R> {
    type Record = R;

    fn store(&mut self, record: R) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }
}
