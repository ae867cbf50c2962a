//! Error types for evac-route.

use thiserror::Error;

/// Planner failure.
///
/// "No path exists" is NOT an error — [`Planner::plan`][crate::Planner::plan]
/// returns an empty path for that.  `RouteError` is reserved for internal
/// faults of custom planner implementations; the orchestrator handles it
/// per-agent without aborting the run.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("planner fault: {0}")]
    Internal(String),
}

/// Alias for `Result<T, RouteError>`.
pub type RouteResult<T> = Result<T, RouteError>;
