//! Engine state types.
//!
//! Defines the state machine for one replication run.
//!
//! # State Transitions
//!
//! ```text
//!        (full batch drained)
//!             ┌───────┐
//!             ↓       │
//!           Running ──┘
//!           │     │
//! (source   │     │ (store fault, or source fault
//!  exhausted)│    │  after the best-effort drain)
//!           ↓     ↓
//!   FlushingFinal Failed
//!        │           ↑
//!        │           │ (final drain failed)
//!        ├───────────┘
//!        │ (final drain succeeded)
//!        ↓
//!      Done
//! ```
//!
//! # State Descriptions
//!
//! - **Running**: Pulling batches and draining full ones. Initial state.
//! - **FlushingFinal**: Source exhausted; draining the last partial batch.
//! - **Done**: Every pulled record was stored. Terminal.
//! - **Failed**: A fatal source or store error ended the run. Terminal.

/// State of a replication run.
///
/// See module docs for the state transition diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Pulling and draining batches.
    ///
    /// The engine stays here as long as every batch fills completely and
    /// drains without error.
    Running,

    /// Source exhausted; draining the final partial batch.
    ///
    /// Transitions to `Done` when the drain succeeds, `Failed` when it
    /// does not. A zero-record final batch drains trivially.
    FlushingFinal,

    /// Run finished; every pulled record was durably stored.
    Done,

    /// Run ended on a fatal error.
    ///
    /// The run report carries the error and how many records were stored
    /// before termination.
    Failed,
}

impl EngineState {
    /// True for states no further transition leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineState::Done | EngineState::Failed)
    }
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineState::Running => write!(f, "Running"),
            EngineState::FlushingFinal => write!(f, "FlushingFinal"),
            EngineState::Done => write!(f, "Done"),
            EngineState::Failed => write!(f, "Failed"),
        }
    }
}
