//! Reusable batch buffer with a fill-and-drain lifecycle.
//!
//! The engine pulls records into a [`Batch`] until it is full or the source
//! stops, then drains the filled portion to the destination in pull order.
//! One buffer serves a whole run; [`fill_from`](Batch::fill_from) and
//! [`drain_into`](Batch::drain_into) recycle the allocation between batches.
//!
//! # Design
//!
//! ```text
//! Source ──pull──▶ Batch<R> (capacity B) ──store──▶ Destination
//!                    │
//!                    ├── fill_from: consecutive pulls from slot 0,
//!                    │   stops at B, exhaustion, or a source fault
//!                    └── drain_into: stores slots in order,
//!                        stops at the first store failure
//! ```
//!
//! Only pulled records live in the buffer, so a partially filled batch can
//! never leak stale data from an earlier round: draining flushes exactly
//! what the last fill produced.

use crate::capability::{Destination, Pulled, Source};
use crate::error::{SourceError, StoreError};
use tracing::debug;

/// Why a fill phase stopped before the batch was full.
#[derive(Debug)]
pub enum FillHalt {
    /// The source reported end-of-data.
    Exhausted,

    /// The source failed; fatal to the run.
    Faulted(SourceError),
}

/// Result of one [`Batch::fill_from`] phase.
#[derive(Debug)]
pub struct FillOutcome {
    /// Records pulled into the batch, all consecutive from the start.
    pub filled: usize,

    /// `None` when the batch filled to capacity; otherwise the reason the
    /// fill stopped early.
    pub halt: Option<FillHalt>,
}

/// Result of one [`Batch::drain_into`] phase.
#[derive(Debug, Default)]
pub struct DrainOutcome {
    /// Records stored before the drain ended.
    pub stored: usize,

    /// The first store failure, if any. Records stored before it remain
    /// stored; nothing is rolled back.
    pub error: Option<StoreError>,
}

impl DrainOutcome {
    /// True if every drained record was stored.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Fixed-capacity ordered buffer of records, owned by one engine run.
///
/// The capacity is set once at construction and must be at least 1; the
/// engine enforces that through
/// [`RelayConfig::validate`](crate::config::RelayConfig::validate).
pub struct Batch<R> {
    records: Vec<R>,
    capacity: usize,
}

impl<R> Batch<R> {
    /// Create an empty batch holding up to `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum records per fill phase.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records currently in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are buffered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if the batch holds `capacity` records.
    pub fn is_full(&self) -> bool {
        self.records.len() == self.capacity
    }

    /// Pull records from `source` until the batch is full, the source is
    /// exhausted, or it fails.
    ///
    /// Clears the buffer first (keeping the allocation), so the outcome's
    /// `filled` count is always the number of consecutive successful pulls
    /// in this phase. If the very first pull signals exhaustion, `filled`
    /// is 0 and draining the empty batch is a no-op.
    pub fn fill_from<S>(&mut self, source: &mut S) -> FillOutcome
    where
        S: Source<Record = R>,
    {
        self.records.clear();

        while self.records.len() < self.capacity {
            match source.pull() {
                Ok(Pulled::Record(record)) => self.records.push(record),
                Ok(Pulled::Exhausted) => {
                    return FillOutcome {
                        filled: self.records.len(),
                        halt: Some(FillHalt::Exhausted),
                    };
                }
                Err(err) => {
                    return FillOutcome {
                        filled: self.records.len(),
                        halt: Some(FillHalt::Faulted(err)),
                    };
                }
            }
        }

        FillOutcome {
            filled: self.records.len(),
            halt: None,
        }
    }

    /// Store the buffered records into `destination` in pull order,
    /// stopping at the first failure.
    ///
    /// Records stored before a failure remain stored. The buffer is left
    /// empty either way, ready for the next fill.
    pub fn drain_into<D>(&mut self, destination: &mut D) -> DrainOutcome
    where
        D: Destination<Record = R>,
    {
        debug!(count = self.records.len(), "Draining batch");

        let mut stored = 0;
        for record in self.records.drain(..) {
            if let Err(err) = destination.store(record) {
                return DrainOutcome {
                    stored,
                    error: Some(err),
                };
            }
            stored += 1;
        }

        DrainOutcome {
            stored,
            error: None,
        }
    }
}
