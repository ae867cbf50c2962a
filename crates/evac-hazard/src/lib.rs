//! `evac-hazard` — the spreading fire field.
//!
//! A [`HazardField`] is a grow-only set of burning cells.  On a fixed tick
//! cadence it runs one frontier pass: every cardinal neighbor of a burning
//! cell that is in bounds, not a wall, and not already burning may ignite.
//! Newly ignited cells join the field only at the end of the pass, so each
//! pass grows the fire by at most one ring — never a same-pass flood fill.
//!
//! There is no extinguish operation.  Once a cell ignites it stays ignited
//! for the rest of the run; consumers can rely on `HazardField(t1) ⊆
//! HazardField(t2)` for `t1 < t2`.

pub mod field;


pub use field::HazardField;
