//! `evac-world` — static world geometry for the evac_rs engine.
//!
//! Two concerns live here:
//!
//! - [`Grid`]: the immutable-after-init bounds and wall set that every other
//!   component queries (`blocked`, `neighbors4`).
//! - [`FloorPlan`] loading: parsing the external editor's JSON document into
//!   validated cells.  A missing or malformed document is a fatal startup
//!   condition — the engine never partially loads a map.
//!
//! Walls are authored before the run starts and never change during it;
//! everything dynamic (fire, agents) lives in other crates.

pub mod error;
pub mod grid;
pub mod map;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use grid::Grid;
pub use map::{load_plan, load_plan_reader, FloorPlan};
