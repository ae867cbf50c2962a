//! Structure-of-Arrays agent storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let pos = store.cell[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Terminal agents keep their slots — IDs stay stable for reporting and
//! output — but drop out of [`active_ids`][AgentStore::active_ids], which is
//! what the orchestrator iterates.

use std::collections::VecDeque;

use evac_core::{AgentId, Cell, Tick};

use crate::AgentStatus;

/// All per-agent simulation state.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current grid cell of each agent.
    pub cell: Vec<Cell>,

    /// Health, `0..=initial_health`.  Non-increasing over an agent's life.
    pub health: Vec<i32>,

    /// Lifecycle status.  Terminal entries never change again.
    pub status: Vec<AgentStatus>,

    /// Planned route; front = next hop.  Replaced wholesale each planning
    /// pass, consumed one cell per move interval.
    pub path: Vec<VecDeque<Cell>>,

    /// Tick of each agent's most recent movement step.
    pub last_move_tick: Vec<Tick>,
}

impl AgentStore {
    /// Create a store with one Active agent per spawn position, all at full
    /// health with empty paths.
    pub fn with_positions(positions: &[Cell], initial_health: i32) -> Self {
        let count = positions.len();
        Self {
            count,
            cell: positions.to_vec(),
            health: vec![initial_health; count],
            status: vec![AgentStatus::Active; count],
            path: vec![VecDeque::new(); count],
            last_move_tick: vec![Tick::ZERO; count],
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Ascending `AgentId`s of agents still in the simulation.
    ///
    /// Ascending order is what makes the sequential apply phase
    /// deterministic, so callers must not re-order this.
    pub fn active_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(|a| self.is_active(*a))
    }

    #[inline]
    pub fn is_active(&self, agent: AgentId) -> bool {
        self.status[agent.index()] == AgentStatus::Active
    }

    /// Number of agents still Active.
    pub fn live_count(&self) -> usize {
        self.status.iter().filter(|s| !s.is_terminal()).count()
    }

    /// The next queued path cell, if any.
    #[inline]
    pub fn next_cell(&self, agent: AgentId) -> Option<Cell> {
        self.path[agent.index()].front().copied()
    }

    // ── Mutation (apply phase only) ───────────────────────────────────────

    /// Replace the agent's planned route.
    pub fn set_path(&mut self, agent: AgentId, path: Vec<Cell>) {
        self.path[agent.index()] = VecDeque::from(path);
    }

    /// Subtract `amount` health, clamping at 0.  Returns the new value.
    ///
    /// Health never increases; callers pass positive damage only.
    pub fn apply_damage(&mut self, agent: AgentId, amount: i32) -> i32 {
        debug_assert!(amount > 0, "damage must be positive");
        let h = &mut self.health[agent.index()];
        *h = (*h - amount).max(0);
        *h
    }

    /// Consume the front path cell: the agent steps onto it and records
    /// `now` as its last move tick.  Returns the new cell, or `None` if the
    /// path was empty (the agent holds position).
    pub fn step_along_path(&mut self, agent: AgentId, now: Tick) -> Option<Cell> {
        let next = self.path[agent.index()].pop_front()?;
        self.cell[agent.index()] = next;
        self.last_move_tick[agent.index()] = now;
        Some(next)
    }

    pub fn mark_saved(&mut self, agent: AgentId) {
        debug_assert!(self.is_active(agent), "terminal status is final");
        self.status[agent.index()] = AgentStatus::Saved;
    }

    pub fn mark_lost(&mut self, agent: AgentId) {
        debug_assert!(self.is_active(agent), "terminal status is final");
        self.status[agent.index()] = AgentStatus::Lost;
    }
}
