//! Planning trait and the default hazard-aware search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use evac_core::Cell;
use evac_hazard::HazardField;
use evac_world::Grid;

use crate::RouteResult;

// ── PlanMode ──────────────────────────────────────────────────────────────────

/// How the planner treats burning cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanMode {
    /// Burning cells are impassable, exactly like walls.
    AvoidHazard,
    /// Burning cells are passable at an extra per-step cost.
    AllowHazard,
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable path planner.
///
/// # Contract
///
/// The returned path runs from the cell after `start` to `goal` inclusive —
/// the front element is the agent's next hop.  `Ok(vec![])` means no path
/// exists (or `start == goal`); `Err` is reserved for internal faults and is
/// handled per-agent by the orchestrator, never aborting the run.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the orchestrator fans one `plan`
/// call per agent out across its worker pool, all sharing one instance.
pub trait Planner: Send + Sync {
    fn plan(
        &self,
        grid: &Grid,
        hazards: &HazardField,
        start: Cell,
        goal: Cell,
        mode: PlanMode,
    ) -> RouteResult<Vec<Cell>>;
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// Hazard-repelling best-first search over the 4-connected grid.
///
/// Step cost is 1, plus `hazard_step_penalty` for entering a burning cell in
/// [`PlanMode::AllowHazard`].  The heuristic is Manhattan distance to the
/// goal **minus** Manhattan distance to the nearest burning cell — see the
/// crate docs for why this deliberately breaks admissibility.
///
/// Nodes are expanded in increasing f-score; ties break FIFO via an
/// insertion sequence number, so identical inputs always produce identical
/// paths.
pub struct AStarPlanner {
    hazard_step_penalty: u32,
}

impl AStarPlanner {
    pub fn new(hazard_step_penalty: u32) -> Self {
        Self { hazard_step_penalty }
    }
}

impl Planner for AStarPlanner {
    fn plan(
        &self,
        grid: &Grid,
        hazards: &HazardField,
        start: Cell,
        goal: Cell,
        mode: PlanMode,
    ) -> RouteResult<Vec<Cell>> {
        Ok(search(grid, hazards, start, goal, mode, self.hazard_step_penalty))
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// f-score shaping term.  Can go negative when the nearest fire is farther
/// than the goal; the open set is keyed on `i64` for that reason.
#[inline]
fn heuristic(cell: Cell, goal: Cell, hazards: &HazardField) -> i64 {
    let base = cell.manhattan(goal) as i64;
    match hazards.nearest_ignited_distance(cell) {
        Some(d) => base - d as i64,
        None => base,
    }
}

fn search(
    grid: &Grid,
    hazards: &HazardField,
    start: Cell,
    goal: Cell,
    mode: PlanMode,
    hazard_step_penalty: u32,
) -> Vec<Cell> {
    // Min-heap keyed (f, seq): Reverse turns BinaryHeap (max) into a
    // min-heap, and the monotone seq gives FIFO among equal f-scores.
    let mut open: BinaryHeap<Reverse<(i64, u64, Cell)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let mut g_score: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut closed: FxHashSet<Cell> = FxHashSet::default();

    g_score.insert(start, 0);
    open.push(Reverse((heuristic(start, goal, hazards), seq, start)));

    while let Some(Reverse((_f, _seq, current))) = open.pop() {
        if current == goal {
            return reconstruct(&came_from, goal);
        }
        if !closed.insert(current) {
            // Stale heap entry — the cell was already expanded at a lower f.
            continue;
        }

        let current_g = g_score[&current];

        for neighbor in grid.neighbors4(current) {
            if grid.is_wall(neighbor) || closed.contains(&neighbor) {
                continue;
            }
            let burning = hazards.contains(neighbor);
            if mode == PlanMode::AvoidHazard && burning {
                continue;
            }

            let step = 1 + if burning { hazard_step_penalty } else { 0 };
            let tentative = current_g + step;
            if g_score.get(&neighbor).is_none_or(|&g| tentative < g) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                seq += 1;
                open.push(Reverse((
                    tentative as i64 + heuristic(neighbor, goal, hazards),
                    seq,
                    neighbor,
                )));
            }
        }
    }

    // Open set exhausted: no route.  An empty path is a value, not an error.
    vec![]
}

/// Walk parent links back from the goal, then reverse into start→goal order.
/// The start cell carries no parent link, so it is naturally excluded.
fn reconstruct(came_from: &FxHashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.reverse();
    path
}
