//! `evac-core` — foundational types for the `evac_rs` evacuation engine.
//!
//! This crate is a dependency of every other `evac-*` crate.  It intentionally
//! has no `evac-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ExitId`                                   |
//! | [`cell`]        | `Cell` grid coordinate, Manhattan distance            |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ExitId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
