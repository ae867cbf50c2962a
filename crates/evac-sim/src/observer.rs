//! Simulation observer trait for progress reporting and data collection.

use evac_agent::{AgentStatus, AgentStore, RunReport};
use evac_core::{AgentId, Tick};
use evac_hazard::HazardField;
use evac_world::Grid;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The snapshot hook is the engine's
/// outbound interface: presentation layers read the world through these
/// borrowed views and never hold onto them across ticks.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, planned: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: planned {planned} routes");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `planned` is the number of agents that had a route computed this
    /// tick (every agent still Active at the planning phase).
    fn on_tick_end(&mut self, _tick: Tick, _planned: usize) {}

    /// Called once per terminal transition, in the tick it happened.
    fn on_outcome(&mut self, _tick: Tick, _agent: AgentId, _status: AgentStatus) {}

    /// Called at snapshot intervals (`config.snapshot_interval_ticks`).
    ///
    /// Provides read-only views of the whole world so output writers and
    /// renderers can record state without the sim knowing about any
    /// specific backend.
    fn on_snapshot(
        &mut self,
        _tick:   Tick,
        _grid:   &Grid,
        _hazard: &HazardField,
        _agents: &AgentStore,
    ) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _final_tick: Tick, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
