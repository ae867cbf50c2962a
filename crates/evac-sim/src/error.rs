//! Error types for evac-sim.

use evac_core::{Cell, CoreError};
use thiserror::Error;

/// Errors raised while constructing a simulation.
///
/// Once a `Sim` is built, the run itself cannot fail: per-agent planner
/// faults are logged and degrade to "no path this tick" rather than
/// surfacing here.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] CoreError),

    #[error("no exit cells defined")]
    NoExits,

    #[error("exit cell {0} is blocked or out of bounds")]
    BadExit(Cell),

    #[error("spawn cell {0} is blocked")]
    SpawnBlocked(Cell),

    #[error("worker pool: {0}")]
    WorkerPool(String),
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
