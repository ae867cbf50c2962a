//! The `Sim` struct and its tick loop.

use evac_agent::{AgentStatus, AgentStore, RunReport};
use evac_core::{AgentId, Cell, ExitId, SimClock, SimConfig, SimRng, Tick};
use evac_hazard::HazardField;
use evac_route::{PlanMode, Planner, RouteResult};
use evac_world::Grid;

use crate::SimObserver;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns all run state — there are no process-wide singletons — and
/// drives the six-phase tick loop described in the crate docs.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Planner> {
    /// Global configuration (cadences, damage, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Static world geometry.  Immutable for the whole run.
    pub grid: Grid,

    /// The spreading fire.  Mutated only in phase ①, outside the planning
    /// window.
    pub hazard: HazardField,

    /// Exit cells.  An agent occupying one is saved.
    pub exits: Vec<Cell>,

    /// Entry cells carried from the floor plan (multi-level spawn points).
    /// The engine itself never reads them; spawn logic may.
    pub entries: Vec<Cell>,

    /// All per-agent state.  Written only in the sequential apply phase.
    pub agents: AgentStore,

    /// Outcome tally, updated as agents reach terminal status.
    pub report: RunReport,

    /// The route planner, shared read-only across planning workers.
    pub(crate) planner: P,

    /// Randomness for the hazard spread policy.
    pub(crate) rng: SimRng,

    /// Bounded worker pool when `config.num_threads` is set; `None` uses the
    /// global Rayon pool.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

/// One tick's terminal transitions, collected during apply and committed in
/// the sweep.
type Outcomes = Vec<(AgentId, AgentStatus)>;

/// Tagged view of a cell's contents, for presentation layers.
///
/// Walls and fire never coincide (spread skips walls), so every cell has
/// exactly one kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Hazard,
}

impl<P: Planner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every agent is terminal or `config.max_ticks` is reached.
    ///
    /// Calls observer hooks at every tick boundary and returns the final
    /// report.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunReport {
        loop {
            let now = self.clock.current_tick;
            if self.agents.live_count() == 0 || now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, observer);
            self.clock.advance();
        }
        observer.on_run_end(self.clock.current_tick, &self.report);
        self.report
    }

    /// Run at most `n` ticks from the current position.
    ///
    /// Stops early if every agent reaches a terminal status.  Useful for
    /// tests, incremental stepping, and external stop signals (the caller
    /// simply stops calling).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            if self.agents.live_count() == 0 {
                break;
            }
            self.tick_once(now, observer);
            self.clock.advance();
        }
    }

    /// What occupies `cell` right now.
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if self.grid.is_wall(cell) {
            CellKind::Wall
        } else if self.hazard.contains(cell) {
            CellKind::Hazard
        } else {
            CellKind::Empty
        }
    }

    fn tick_once<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);
        let (planned, outcomes) = self.process_tick(now);
        for &(agent, status) in &outcomes {
            observer.on_outcome(now, agent, status);
        }
        observer.on_tick_end(now, planned);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.grid, &self.hazard, &self.agents);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> (usize, Outcomes) {
        // ── Phase ①: hazard spread on its own cadence ─────────────────────
        let ignited = self.hazard.advance(now, &self.grid, &mut self.rng);
        if ignited > 0 {
            log::debug!("{now}: fire spread to {ignited} new cells ({} total)", self.hazard.len());
        }

        // ── Phases ②–④: snapshot, fan out, join ───────────────────────────
        //
        // From here to the end of compute_paths, grid and hazard are only
        // borrowed shared; nothing may mutate them until the collect barrier
        // has joined every planning task.
        let live: Vec<AgentId> = self.agents.active_ids().collect();
        let planned = self.compute_paths(&live);
        let planned_count = planned.len();

        // ── Phase ⑤: sequential apply, ascending AgentId ──────────────────
        //
        // `live` came out of active_ids() ascending, and compute_paths
        // preserves input order regardless of worker scheduling, so the
        // write order below is deterministic.
        let mut outcomes: Outcomes = Vec::new();
        for (agent, result) in planned {
            match result {
                Ok(path) => self.agents.set_path(agent, path),
                Err(e) => {
                    // Worker fault for this agent only: hold position this
                    // tick, replan next tick.
                    log::warn!("{now}: agent {agent} planner fault: {e}");
                    self.agents.set_path(agent, Vec::new());
                }
            }

            // Exit occupancy is terminal, checked before damage or movement.
            let cell = self.agents.cell[agent.index()];
            if let Some(exit) = self.exits.iter().position(|&e| e == cell) {
                log::debug!("{now}: agent {agent} reached {}", ExitId(exit as u16));
                outcomes.push((agent, AgentStatus::Saved));
                continue;
            }

            // A burning next cell costs health every tick, whether or not
            // the move below executes this tick.
            if let Some(next) = self.agents.next_cell(agent) {
                if self.hazard.contains(next) {
                    let health = self.agents.apply_damage(agent, self.config.hazard_damage);
                    if health == 0 {
                        outcomes.push((agent, AgentStatus::Lost));
                        continue; // the pending move is not executed
                    }
                }
            }

            // Movement runs on its own, coarser cadence.
            if now.since(self.agents.last_move_tick[agent.index()])
                >= self.config.move_interval_ticks
            {
                self.agents.step_along_path(agent, now);
            }
        }

        // ── Phase ⑥: sweep ────────────────────────────────────────────────
        //
        // Statuses flip only now, after iteration is complete, so the apply
        // loop never observes a half-removed live set.
        for &(agent, status) in &outcomes {
            match status {
                AgentStatus::Saved => self.agents.mark_saved(agent),
                AgentStatus::Lost => self.agents.mark_lost(agent),
                AgentStatus::Active => unreachable!("outcome list holds terminal transitions"),
            }
            self.report.record(status);
        }

        (planned_count, outcomes)
    }

    /// Compute a route for every live agent against the current snapshot.
    ///
    /// With the `parallel` feature the batch runs on the worker pool; the
    /// tasks share `&Grid`, `&HazardField`, and `&P` and touch no mutable
    /// state, so the phase is embarrassingly parallel.  The returned `Vec`
    /// is in `live` order either way.
    fn compute_paths(&self, live: &[AgentId]) -> Vec<(AgentId, RouteResult<Vec<Cell>>)> {
        let grid = &self.grid;
        let hazard = &self.hazard;
        let exits = self.exits.as_slice();
        let planner = &self.planner;
        let starts: Vec<Cell> = live.iter().map(|a| self.agents.cell[a.index()]).collect();

        #[cfg(not(feature = "parallel"))]
        {
            live.iter()
                .zip(starts)
                .map(|(&agent, start)| {
                    (agent, plan_to_nearest_exit(planner, grid, hazard, exits, start))
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let fan_out = || {
                live.par_iter()
                    .zip(starts.into_par_iter())
                    .map(|(&agent, start)| {
                        (agent, plan_to_nearest_exit(planner, grid, hazard, exits, start))
                    })
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(fan_out),
                None => fan_out(),
            }
        }
    }
}

// ── Caller-level planning policy ──────────────────────────────────────────────

/// Try exits in ascending Manhattan distance from `start`; the first exit
/// either mode can reach wins.  Returns an empty path if no exit is
/// reachable at all — the agent holds position this tick.
fn plan_to_nearest_exit<P: Planner>(
    planner: &P,
    grid:    &Grid,
    hazard:  &HazardField,
    exits:   &[Cell],
    start:   Cell,
) -> RouteResult<Vec<Cell>> {
    let mut ordered: Vec<Cell> = exits.to_vec();
    ordered.sort_by_key(|&e| (start.manhattan(e), e));

    for goal in ordered {
        let path = plan_with_fallback(planner, grid, hazard, start, goal)?;
        if !path.is_empty() {
            return Ok(path);
        }
    }
    Ok(Vec::new())
}

/// The avoid-then-allow retry policy.
///
/// This lives at the caller level by contract: the planner itself knows
/// nothing about fallbacks.  Prefer a fire-free route; only when none exists
/// accept a penalized route through fire.
pub fn plan_with_fallback<P: Planner + ?Sized>(
    planner: &P,
    grid:    &Grid,
    hazard:  &HazardField,
    start:   Cell,
    goal:    Cell,
) -> RouteResult<Vec<Cell>> {
    let safe = planner.plan(grid, hazard, start, goal, PlanMode::AvoidHazard)?;
    if !safe.is_empty() {
        return Ok(safe);
    }
    planner.plan(grid, hazard, start, goal, PlanMode::AllowHazard)
}
