//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all record sequences
//! and batch sizes, helping catch edge cases that unit tests might miss.

use proptest::prelude::*;
use relay_engine::capability::{Destination, Pulled, Source};
use relay_engine::error::{SourceError, StoreError};
use relay_engine::mem::{VecSource, VecStore};
use relay_engine::{RelayConfig, RelayEngine};
use std::collections::VecDeque;

fn engine(batch_size: usize) -> RelayEngine {
    RelayEngine::new(RelayConfig { batch_size }).expect("valid config")
}

/// Source that yields `records` in order, then faults on every pull.
struct FaultingSource {
    pending: VecDeque<u32>,
}

impl FaultingSource {
    fn after(records: &[u32]) -> Self {
        Self {
            pending: records.iter().copied().collect(),
        }
    }
}

impl Source for FaultingSource {
    type Record = u32;

    fn pull(&mut self) -> Result<Pulled<u32>, SourceError> {
        match self.pending.pop_front() {
            Some(record) => Ok(Pulled::Record(record)),
            None => Err(SourceError::new("injected extraction fault")),
        }
    }
}

/// Destination that accepts `accept` records, then fails every call.
struct FlakyStore {
    stored: Vec<u32>,
    accept: usize,
}

impl FlakyStore {
    fn accepting(accept: usize) -> Self {
        Self {
            stored: Vec::new(),
            accept,
        }
    }
}

impl Destination for FlakyStore {
    type Record = u32;

    fn store(&mut self, record: u32) -> Result<(), StoreError> {
        if self.stored.len() >= self.accept {
            return Err(StoreError::new("injected store failure"));
        }
        self.stored.push(record);
        Ok(())
    }
}

// =============================================================================
// Delivery Properties
// =============================================================================

proptest! {
    /// Every record reaches the destination exactly once, in pull order,
    /// in ceil(N/B) store phases.
    #[test]
    fn relay_preserves_order_and_count(
        records in prop::collection::vec(any::<u32>(), 0..300),
        batch_size in 1usize..40,
    ) {
        let mut engine = engine(batch_size);
        let mut store = VecStore::new();

        let report = engine.run(VecSource::new(records.clone()), &mut store);

        prop_assert!(report.is_complete());
        prop_assert_eq!(report.records_stored, records.len());
        prop_assert_eq!(store.records(), &records[..]);

        let expected_batches = (records.len() + batch_size - 1) / batch_size;
        prop_assert_eq!(report.batches_flushed, expected_batches);
    }

    /// Batch size 1 degenerates to one store call per pull and still
    /// delivers everything.
    #[test]
    fn relay_batch_size_one_equivalent(
        records in prop::collection::vec(any::<u32>(), 0..100),
    ) {
        let mut engine = engine(1);
        let mut store = VecStore::new();

        let report = engine.run(VecSource::new(records.clone()), &mut store);

        prop_assert!(report.is_complete());
        prop_assert_eq!(report.batches_flushed, records.len());
        prop_assert_eq!(store.records(), &records[..]);
    }

    /// Two runs over identical record sequences produce identical
    /// destinations.
    #[test]
    fn relay_runs_are_idempotent(
        records in prop::collection::vec(any::<u32>(), 0..200),
        batch_size in 1usize..20,
    ) {
        let mut first = VecStore::new();
        let mut second = VecStore::new();

        engine(batch_size).run(VecSource::new(records.clone()), &mut first);
        engine(batch_size).run(VecSource::new(records), &mut second);

        prop_assert_eq!(first.records(), second.records());
    }
}

// =============================================================================
// Failure Accounting Properties
// =============================================================================

proptest! {
    /// A store that fails after `accept` records leaves exactly
    /// min(accept, N) records stored, and the run fails iff accept < N.
    #[test]
    fn relay_store_failure_accounting(
        records in prop::collection::vec(any::<u32>(), 0..200),
        batch_size in 1usize..20,
        accept in 0usize..220,
    ) {
        let mut engine = engine(batch_size);
        let mut store = FlakyStore::accepting(accept);

        let report = engine.run(VecSource::new(records.clone()), &mut store);

        let expected = accept.min(records.len());
        prop_assert_eq!(report.records_stored, expected);
        prop_assert_eq!(&store.stored[..], &records[..expected]);

        if accept >= records.len() {
            prop_assert!(report.is_complete());
        } else {
            let err = report.outcome.error().expect("run should fail");
            prop_assert!(err.is_store_fault());
        }
    }

    /// A source fault after k records still delivers all k: full batches
    /// normally, the last partial batch via the best-effort drain.
    #[test]
    fn relay_source_fault_drains_pulled_records(
        records in prop::collection::vec(any::<u32>(), 0..200),
        batch_size in 1usize..20,
    ) {
        let mut engine = engine(batch_size);
        let mut store = VecStore::new();

        let report = engine.run(FaultingSource::after(&records), &mut store);

        prop_assert_eq!(report.records_stored, records.len());
        prop_assert_eq!(store.records(), &records[..]);

        let err = report.outcome.error().expect("run should fail");
        prop_assert!(err.is_source_fault());
    }

    /// When both sides fail, the store failure is the reported error and
    /// the stored count still reflects exactly what was persisted.
    #[test]
    fn relay_store_error_takes_precedence(
        pulled in 1usize..60,
        batch_size in 1usize..16,
        accept in 0usize..60,
    ) {
        let records: Vec<u32> = (0..pulled as u32).collect();
        let mut engine = engine(batch_size);
        let mut store = FlakyStore::accepting(accept);

        let report = engine.run(FaultingSource::after(&records), &mut store);

        let err = report.outcome.error().expect("run always fails here");
        if accept >= records.len() {
            // Every pulled record was stored; the source fault surfaces.
            prop_assert_eq!(report.records_stored, records.len());
            prop_assert!(err.is_source_fault());
        } else {
            // The store gave out first and wins the report.
            prop_assert_eq!(report.records_stored, accept);
            prop_assert!(err.is_store_fault());
        }
    }
}
