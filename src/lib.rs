//! # Relay Engine
//!
//! A batched record-replication engine that drains a pluggable source into a
//! pluggable destination.
//!
//! ## Architecture
//!
//! The engine sits between two capability contracts and owns nothing but the
//! orchestration: it pulls records in bounded batches and flushes each batch
//! before pulling the next:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           relay-engine                           │
//! │                                                                  │
//! │  ┌──────────┐  pull    ┌──────────────┐  store   ┌────────────┐  │
//! │  │  Source  │─────────►│   Batch<R>   │─────────►│Destination │  │
//! │  │ (plugged)│          │ (capacity B) │          │ (plugged)  │  │
//! │  └──────────┘          └──────────────┘          └────────────┘  │
//! │                               ▲                                  │
//! │                               │                                  │
//! │                         RelayEngine                              │
//! │              (fill → classify → drain → transition)              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Batching decouples destination-call frequency from source-call frequency;
//! the buffer is allocated once per run and reused across batches. Source
//! exhaustion is a designed signal ([`Pulled::Exhausted`]), never an error.
//! On a source fault the engine still drains the records it already pulled
//! before reporting the failure, so extracted data is not silently dropped.
//!
//! ## Usage
//!
//! ```rust
//! use relay_engine::mem::{VecSource, VecStore};
//! use relay_engine::{RelayConfig, RelayEngine};
//!
//! let mut engine = RelayEngine::new(RelayConfig { batch_size: 3 }).unwrap();
//!
//! let source = VecSource::new(vec!["a", "b", "c", "d", "e"]);
//! let mut store = VecStore::new();
//!
//! let report = engine.run(source, &mut store);
//!
//! assert!(report.is_complete());
//! assert_eq!(report.records_stored, 5);
//! assert_eq!(store.records(), ["a", "b", "c", "d", "e"]);
//! ```

pub mod batch;
pub mod capability;
pub mod config;
pub mod duplex;
pub mod engine;
pub mod error;
pub mod mem;
pub mod metrics;
pub mod state;

// Re-exports for convenience
pub use batch::{Batch, DrainOutcome, FillHalt, FillOutcome};
pub use capability::{Destination, Pulled, Source};
pub use config::RelayConfig;
pub use duplex::Duplex;
pub use engine::{RelayEngine, RunOutcome, RunReport};
pub use error::{RelayError, Result, SourceError, StoreError};
pub use state::EngineState;
