//! Framework error type.
//!
//! Sub-crates define their own error enums (`WorldError`, `RouteError`,
//! `SimError`, …) and either convert into `CoreError` via `From` impls or
//! keep them separate.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The top-level error type for `evac-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `evac-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
