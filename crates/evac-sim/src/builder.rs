//! Fluent builder for constructing a [`Sim`].

use evac_agent::{AgentStore, RunReport};
use evac_core::{Cell, SimConfig, SimRng};
use evac_hazard::HazardField;
use evac_route::Planner;
use evac_world::{FloorPlan, Grid};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — cadences, damage, seed, …
/// - [`Grid`] — the world geometry (or a whole [`FloorPlan`] via
///   [`from_plan`][Self::from_plan])
/// - `P: Planner` — the route planner (e.g. [`evac_route::AStarPlanner`])
///
/// # Optional inputs
///
/// | Method              | Default                                    |
/// |---------------------|--------------------------------------------|
/// | `.exits(v)`         | none — `build` fails without at least one  |
/// | `.entries(v)`       | empty                                      |
/// | `.spawns(v)`        | no agents (the run ends immediately)       |
/// | `.initial_fires(v)` | nothing burning                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_plan(config, &plan, AStarPlanner::new(10))
///     .spawns(spawn_cells)
///     .initial_fires(vec![Cell::new(20, 15)])
///     .build()?;
/// let report = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: Planner> {
    config:        SimConfig,
    grid:          Grid,
    planner:       P,
    exits:         Vec<Cell>,
    entries:       Vec<Cell>,
    spawns:        Vec<Cell>,
    initial_fires: Vec<Cell>,
}

impl<P: Planner> SimBuilder<P> {
    /// Create a builder from a bare grid.  Exits must be supplied separately.
    pub fn new(config: SimConfig, grid: Grid, planner: P) -> Self {
        Self {
            config,
            grid,
            planner,
            exits:         Vec::new(),
            entries:       Vec::new(),
            spawns:        Vec::new(),
            initial_fires: Vec::new(),
        }
    }

    /// Create a builder with grid, exits, and entries taken from a loaded
    /// floor plan.
    pub fn from_plan(config: SimConfig, plan: &FloorPlan, planner: P) -> Self {
        let mut builder = Self::new(config, plan.grid(), planner);
        builder.exits = plan.exits.clone();
        builder.entries = plan.entries.clone();
        builder
    }

    /// Replace the exit cell list.
    pub fn exits(mut self, exits: Vec<Cell>) -> Self {
        self.exits = exits;
        self
    }

    /// Replace the entry cell list (multi-level spawn points).
    pub fn entries(mut self, entries: Vec<Cell>) -> Self {
        self.entries = entries;
        self
    }

    /// Spawn one agent per cell, in `AgentId` order.
    pub fn spawns(mut self, spawns: Vec<Cell>) -> Self {
        self.spawns = spawns;
        self
    }

    /// Ignite these cells before the first tick.  Seeds on walls are
    /// silently skipped (igniting a wall is a no-op by contract).
    pub fn initial_fires(mut self, fires: Vec<Cell>) -> Self {
        self.initial_fires = fires;
        self
    }

    /// Validate everything and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        // ── Validate exits ────────────────────────────────────────────────
        if self.exits.is_empty() {
            return Err(SimError::NoExits);
        }
        for &exit in &self.exits {
            if self.grid.blocked(exit) {
                return Err(SimError::BadExit(exit));
            }
        }

        // ── Validate spawns ───────────────────────────────────────────────
        //
        // A spawn inside a wall (or on a seed fire) would start the agent in
        // an impossible position; fail fast rather than simulate nonsense.
        for &spawn in &self.spawns {
            if self.grid.blocked(spawn) || self.initial_fires.contains(&spawn) {
                return Err(SimError::SpawnBlocked(spawn));
            }
        }

        // ── Assemble run state ────────────────────────────────────────────
        let mut hazard = HazardField::new(
            self.config.hazard_interval_ticks,
            self.config.spread_probability,
        );
        for &seed in &self.initial_fires {
            hazard.ignite(seed, &self.grid);
        }

        let agents = AgentStore::with_positions(&self.spawns, self.config.initial_health);

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::WorkerPool(e.to_string()))?,
            ),
            None => None,
        };

        let report = RunReport::new(agents.count);
        let clock = self.config.make_clock();
        let rng = SimRng::new(self.config.seed);
        Ok(Sim {
            clock,
            config: self.config,
            grid: self.grid,
            hazard,
            exits: self.exits,
            entries: self.entries,
            agents,
            report,
            planner: self.planner,
            rng,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
