//! The `HazardField` and its spread pass.

use evac_core::{Cell, SimRng, Tick};
use evac_world::Grid;
use rustc_hash::FxHashSet;

/// The set of burning cells plus the spread cadence state.
///
/// Membership queries go through the hash set; `order` records ignition
/// order, which gives the spread pass a deterministic iteration sequence
/// (hash-set iteration order would make probabilistic spread depend on
/// hasher state) and lets tests assert on when cells caught fire.
pub struct HazardField {
    ignited: FxHashSet<Cell>,
    /// Every ignited cell, in ignition order.  Invariant: same membership
    /// as `ignited`.
    order: Vec<Cell>,
    last_spread_tick: Tick,
    interval_ticks: u64,
    spread_probability: f64,
}

impl HazardField {
    /// An empty field that spreads every `interval_ticks`, igniting each
    /// frontier candidate with `spread_probability` (1.0 = always).
    pub fn new(interval_ticks: u64, spread_probability: f64) -> Self {
        Self {
            ignited: FxHashSet::default(),
            order: Vec::new(),
            last_spread_tick: Tick::ZERO,
            interval_ticks,
            spread_probability,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.ignited.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All burning cells, in ignition order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.order.iter().copied()
    }

    /// The tick of the most recent spread pass.
    pub fn last_spread_tick(&self) -> Tick {
        self.last_spread_tick
    }

    /// Manhattan distance from `cell` to the nearest burning cell, or `None`
    /// if nothing is burning.  O(burning cells); feeds the planner's
    /// hazard-repelling heuristic term.
    pub fn nearest_ignited_distance(&self, cell: Cell) -> Option<u32> {
        self.ignited.iter().map(|&f| cell.manhattan(f)).min()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Ignite `cell` directly (a fire seed, not spread).
    ///
    /// Returns `false` without side effects if the cell is blocked or
    /// already burning — igniting a wall is a no-op, never an error.
    pub fn ignite(&mut self, cell: Cell, grid: &Grid) -> bool {
        if grid.blocked(cell) || self.ignited.contains(&cell) {
            return false;
        }
        self.ignited.insert(cell);
        self.order.push(cell);
        true
    }

    /// Run one spread pass if the interval has elapsed since the last one.
    ///
    /// Returns the number of newly ignited cells (0 when the cadence gate
    /// holds or nothing caught).  The pass stages candidates first and
    /// unions them in at the end: igniting mid-scan would let fresh fire
    /// spread again within the same pass, collapsing the one-ring-per-
    /// interval growth bound.
    pub fn advance(&mut self, now: Tick, grid: &Grid, rng: &mut SimRng) -> usize {
        if now.since(self.last_spread_tick) < self.interval_ticks {
            return 0;
        }
        self.last_spread_tick = now;

        let mut staged: Vec<Cell> = Vec::new();
        let mut considered: FxHashSet<Cell> = FxHashSet::default();

        for &cell in &self.order {
            for n in grid.neighbors4(cell) {
                if grid.is_wall(n) || self.ignited.contains(&n) {
                    continue;
                }
                // One probability roll per candidate per pass, even when the
                // candidate borders several burning cells.
                if !considered.insert(n) {
                    continue;
                }
                // p = 1.0 bypasses the RNG: the unconditional policy must not
                // perturb the random stream shared with other consumers.
                if self.spread_probability >= 1.0 || rng.gen_bool(self.spread_probability) {
                    staged.push(n);
                }
            }
        }

        self.ignited.extend(staged.iter().copied());
        self.order.extend_from_slice(&staged);
        staged.len()
    }
}
