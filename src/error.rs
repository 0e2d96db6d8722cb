// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Error types for the relay engine.
//!
//! Errors are split into two layers: the capability-level failures raised by
//! a [`Source`](crate::capability::Source) or
//! [`Destination`](crate::capability::Destination) implementation
//! ([`SourceError`], [`StoreError`]), and the run-level terminal error
//! ([`RelayError`]) the engine reports when a run ends in failure.
//!
//! Source exhaustion is **not** an error. A drained source reports
//! [`Pulled::Exhausted`](crate::capability::Pulled), which the engine treats
//! as the designed, successful termination signal.
//!
//! # Error Categories
//!
//! | Error Type | Fatal | Description |
//! |------------|-------|-------------|
//! | `Source` | Yes | Extraction failed; already-pulled records are drained best-effort first |
//! | `Store` | Yes | Persistence failed; records stored before the failure remain stored |
//! | `Config` | Yes | Configuration invalid; fix the config and reconstruct the engine |
//!
//! # Precedence
//!
//! When a `StoreError` occurs while draining records that were pulled before
//! a `SourceError`, the `StoreError` is reported as the terminal error and
//! the source fault is logged. See [`RelayEngine`](crate::engine::RelayEngine)
//! for the full policy.

use thiserror::Error;

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Extraction failure raised by a [`Source`](crate::capability::Source).
///
/// Carries a human-readable message and an optional implementation-defined
/// cause. Exhaustion is not a `SourceError`; see
/// [`Pulled::Exhausted`](crate::capability::Pulled).
#[derive(Error, Debug)]
#[error("source error: {message}")]
pub struct SourceError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl SourceError {
    /// Create a source error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a source error wrapping an underlying cause.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The failure message, without the underlying cause.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Persistence failure raised by a [`Destination`](crate::capability::Destination).
#[derive(Error, Debug)]
#[error("store error: {message}")]
pub struct StoreError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl StoreError {
    /// Create a store error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a store error wrapping an underlying cause.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The failure message, without the underlying cause.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Terminal error for a replication run.
///
/// Exactly one of these is reported per failed run, together with the count
/// of records durably stored before termination (see
/// [`RunReport`](crate::engine::RunReport)).
#[derive(Error, Debug)]
pub enum RelayError {
    /// Extraction from the source failed.
    ///
    /// Records pulled before the failure were drained best-effort to the
    /// destination before this was reported.
    #[error("extraction failed: {0}")]
    Source(#[from] SourceError),

    /// Persisting to the destination failed.
    ///
    /// Records stored before the failing call remain stored.
    #[error("persistence failed: {0}")]
    Store(#[from] StoreError),

    /// Invalid engine configuration.
    ///
    /// Raised at construction time, never mid-run.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RelayError {
    /// True if the run failed on the extraction side.
    pub fn is_source_fault(&self) -> bool {
        matches!(self, Self::Source(_))
    }

    /// True if the run failed on the persistence side.
    pub fn is_store_fault(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
