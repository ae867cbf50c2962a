//! The `OutputWriter` trait implemented by all backend writers.

use evac_agent::RunReport;

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends (CSV today; the seam exists so a
/// database or columnar backend can slot in without touching the observer).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the end-of-run report.
    fn write_report(&mut self, report: &RunReport) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
