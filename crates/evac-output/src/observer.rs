//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use evac_agent::{AgentStatus, AgentStore, RunReport};
use evac_core::{SimConfig, Tick};
use evac_hazard::HazardField;
use evac_sim::SimObserver;
use evac_world::Grid;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that records agent snapshots, tick summaries, and the
/// final report through any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:           W,
    tick_duration_ms: u32,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for elapsed-time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_ms: config.tick_duration_ms,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn elapsed_ms(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_ms as u64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, _grid: &Grid, hazard: &HazardField, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                AgentSnapshotRow {
                    agent_id: agent.0,
                    tick:     tick.0,
                    col:      agents.cell[i].col,
                    row:      agents.cell[i].row,
                    health:   agents.health[i],
                    status:   agents.status[i],
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let live = agents.live_count() as u64;
        let terminal = agents.count as u64 - live;
        let saved = agents
            .status
            .iter()
            .filter(|s| **s == AgentStatus::Saved)
            .count() as u64;
        let summary = TickSummaryRow {
            tick:          tick.0,
            elapsed_ms:    self.elapsed_ms(tick),
            live,
            saved,
            lost:          terminal - saved,
            ignited_cells: hazard.len() as u64,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick, report: &RunReport) {
        let result = self.writer.write_report(report);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
