//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//! - `run_report.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use evac_agent::RunReport;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    report:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "col", "row", "health", "status"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_ms", "live", "saved", "lost", "ignited_cells"])?;

        let mut report = Writer::from_path(dir.join("run_report.csv"))?;
        report.write_record(["total", "saved", "lost", "survival_rate_pct"])?;

        Ok(Self {
            snapshots,
            summaries,
            report,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.col.to_string(),
                row.row.to_string(),
                row.health.to_string(),
                row.status.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.live.to_string(),
            row.saved.to_string(),
            row.lost.to_string(),
            row.ignited_cells.to_string(),
        ])?;
        Ok(())
    }

    fn write_report(&mut self, report: &RunReport) -> OutputResult<()> {
        self.report.write_record(&[
            report.total.to_string(),
            report.saved.to_string(),
            report.lost.to_string(),
            format!("{:.2}", report.survival_rate()),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.report.flush()?;
        Ok(())
    }
}
