// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Relay engine orchestration.
//!
//! The main loop that ties together:
//! - Record extraction via [`crate::capability::Source`]
//! - Batch buffering via [`crate::batch::Batch`]
//! - Record persistence via [`crate::capability::Destination`]
//!
//! # Run Lifecycle
//!
//! Each run repeats fill-then-drain until the source stops:
//! 1. Fill the batch from the source.
//! 2. Full batch: drain it and loop.
//! 3. Source exhausted: drain the final partial batch and finish `Done`.
//! 4. Source fault: drain whatever was pulled (best effort), then finish
//!    `Failed`.
//!
//! A store failure is fatal wherever it happens. When it happens during the
//! best-effort drain after a source fault, the store failure is the reported
//! error and the masked source fault is logged at WARN; see
//! [`crate::error`] for the precedence table.

use crate::batch::{Batch, DrainOutcome, FillHalt};
use crate::capability::{Destination, Source};
use crate::config::RelayConfig;
use crate::duplex::Duplex;
use crate::error::{RelayError, Result, StoreError};
use crate::metrics;
use crate::state::EngineState;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Terminal outcome of one run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The source was drained to exhaustion and every record stored.
    Complete,

    /// A fatal error ended the run early.
    Failed(RelayError),
}

impl RunOutcome {
    /// True if the run drained the source completely.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The terminal error, if the run failed.
    pub fn error(&self) -> Option<&RelayError> {
        match self {
            Self::Complete => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// Result of one engine run, reported on success and failure alike.
#[derive(Debug)]
pub struct RunReport {
    /// Records durably stored before the run ended.
    pub records_stored: usize,

    /// Non-empty batches drained without error.
    pub batches_flushed: usize,

    /// How the run ended.
    pub outcome: RunOutcome,
}

impl RunReport {
    /// True if the run drained the source completely.
    pub fn is_complete(&self) -> bool {
        self.outcome.is_complete()
    }
}

/// Running totals for one run.
#[derive(Default)]
struct RunTally {
    records_stored: usize,
    batches_flushed: usize,
}

/// The batched replication engine.
///
/// Owns the batch buffer for the duration of each run and classifies source
/// and store failures into one terminal outcome per run. The engine value is
/// reusable; [`state()`](Self::state) reports the latest run's state.
///
/// # Example
///
/// ```rust
/// use relay_engine::mem::{VecSource, VecStore};
/// use relay_engine::{RelayConfig, RelayEngine};
///
/// let mut engine = RelayEngine::new(RelayConfig { batch_size: 3 }).unwrap();
/// let mut store = VecStore::new();
///
/// let report = engine.run(VecSource::new(vec!["a", "b", "c", "d", "e"]), &mut store);
///
/// assert!(report.is_complete());
/// assert_eq!(report.records_stored, 5);
/// assert_eq!(report.batches_flushed, 2);
/// assert_eq!(store.records(), ["a", "b", "c", "d", "e"]);
/// ```
#[derive(Debug)]
pub struct RelayEngine {
    config: RelayConfig,
    state: EngineState,
}

impl RelayEngine {
    /// Create an engine with the given configuration.
    ///
    /// Fails with [`RelayError::Config`] if the configuration is invalid.
    pub fn new(config: RelayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: EngineState::Running,
        })
    }

    /// The engine configuration.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// State of the latest run (or the initial `Running` state before the
    /// first run).
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Replicate `source` into `destination` until the source is exhausted
    /// or a fatal error ends the run.
    ///
    /// Wires the two capabilities into a [`Duplex`] and drives the same
    /// loop as [`run_duplex`](Self::run_duplex).
    pub fn run<S, D>(&mut self, source: S, destination: D) -> RunReport
    where
        S: Source,
        D: Destination<Record = S::Record>,
    {
        self.run_duplex(Duplex::new(source, destination))
    }

    /// Replicate over a single value implementing both capabilities.
    pub fn run_duplex<L>(&mut self, mut link: L) -> RunReport
    where
        L: Source + Destination<Record = <L as Source>::Record>,
    {
        self.state = EngineState::Running;
        let mut batch = Batch::with_capacity(self.config.batch_size);
        let mut tally = RunTally::default();

        info!(batch_size = self.config.batch_size, "Starting relay run");

        loop {
            let fill = batch.fill_from(&mut link);
            metrics::record_records_pulled(fill.filled);

            match fill.halt {
                None => {
                    debug!(filled = fill.filled, "Draining full batch");
                    if let Some(err) = Self::flush(&mut batch, &mut link, &mut tally) {
                        return self.fail(tally, RelayError::Store(err));
                    }
                }
                Some(FillHalt::Exhausted) => {
                    self.state = EngineState::FlushingFinal;
                    debug!(filled = fill.filled, "Source exhausted, draining final batch");
                    if let Some(err) = Self::flush(&mut batch, &mut link, &mut tally) {
                        return self.fail(tally, RelayError::Store(err));
                    }
                    return self.complete(tally);
                }
                Some(FillHalt::Faulted(source_err)) => {
                    debug!(filled = fill.filled, "Source fault, draining pulled records");
                    if let Some(store_err) = Self::flush(&mut batch, &mut link, &mut tally) {
                        warn!(
                            source_error = %source_err,
                            "Source fault masked by store failure during best-effort drain"
                        );
                        return self.fail(tally, RelayError::Store(store_err));
                    }
                    return self.fail(tally, RelayError::Source(source_err));
                }
            }
        }
    }

    /// Drain the batch, folding the result into the run tally.
    ///
    /// Draining an empty batch is skipped entirely so a run whose record
    /// count is an exact multiple of the batch size reports no trailing
    /// zero-record flush.
    fn flush<R, D>(batch: &mut Batch<R>, destination: &mut D, tally: &mut RunTally) -> Option<StoreError>
    where
        D: Destination<Record = R>,
    {
        if batch.is_empty() {
            return None;
        }

        let started = Instant::now();
        let drained: DrainOutcome = batch.drain_into(destination);
        tally.records_stored += drained.stored;
        metrics::record_batch_drain(drained.stored, started.elapsed());

        match drained.error {
            Some(err) => Some(err),
            None => {
                tally.batches_flushed += 1;
                metrics::record_batch_flushed();
                None
            }
        }
    }

    fn complete(&mut self, tally: RunTally) -> RunReport {
        self.state = EngineState::Done;
        metrics::record_run_outcome("complete");
        info!(
            records_stored = tally.records_stored,
            batches_flushed = tally.batches_flushed,
            "Relay run complete"
        );
        RunReport {
            records_stored: tally.records_stored,
            batches_flushed: tally.batches_flushed,
            outcome: RunOutcome::Complete,
        }
    }

    fn fail(&mut self, tally: RunTally, err: RelayError) -> RunReport {
        self.state = EngineState::Failed;
        let outcome = match &err {
            RelayError::Source(_) => "source_error",
            RelayError::Store(_) => "store_error",
            RelayError::Config(_) => "config_error",
        };
        metrics::record_run_outcome(outcome);
        error!(
            error = %err,
            records_stored = tally.records_stored,
            "Relay run failed"
        );
        RunReport {
            records_stored: tally.records_stored,
            batches_flushed: tally.batches_flushed,
            outcome: RunOutcome::Failed(err),
        }
    }
}
