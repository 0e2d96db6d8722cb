//! Metrics for observability.
//!
//! Exports Prometheus-compatible metrics for:
//! - Records pulled and stored
//! - Batch flush throughput and drain latency
//! - Run outcomes
//!
//! # Metric Naming Convention
//!
//! All metrics are prefixed with `relay_` and follow Prometheus conventions:
//! - Counters end in `_total`
//! - Histograms track distributions (duration)
//!
//! # Usage
//!
//! ```rust,no_run
//! use relay_engine::metrics;
//! use std::time::Duration;
//!
//! // In the engine after a fill phase
//! metrics::record_records_pulled(42);
//!
//! // After each drain
//! metrics::record_batch_drain(42, Duration::from_millis(3));
//! ```

use metrics::{counter, histogram};
use std::time::Duration;

/// Record records pulled from the source during one fill phase.
pub fn record_records_pulled(count: usize) {
    counter!("relay_records_pulled_total").increment(count as u64);
}

/// Record one batch drain: records durably stored and drain duration.
///
/// Called for partial drains too, so `relay_records_stored_total` tracks
/// exactly what reached the destination.
pub fn record_batch_drain(stored: usize, duration: Duration) {
    counter!("relay_records_stored_total").increment(stored as u64);
    histogram!("relay_batch_drain_duration_seconds").record(duration.as_secs_f64());
}

/// Record a non-empty batch drained without error.
pub fn record_batch_flushed() {
    counter!("relay_batches_flushed_total").increment(1);
}

/// Record the terminal outcome of a run.
///
/// `outcome` is one of `complete`, `source_error`, `store_error`.
pub fn record_run_outcome(outcome: &str) {
    counter!("relay_runs_total", "outcome" => outcome.to_string()).increment(1);
}
