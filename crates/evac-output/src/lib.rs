//! `evac-output` — simulation output writers for the evac_rs engine.
//!
//! The CSV backend creates three files in the configured output directory:
//!
//! | File                  | One row per…                                  |
//! |-----------------------|-----------------------------------------------|
//! | `agent_snapshots.csv` | agent × snapshot tick (position/health/status)|
//! | `tick_summaries.csv`  | snapshot tick (live/saved/lost/fire counts)   |
//! | `run_report.csv`      | run (final saved/lost/survival-rate tally)    |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `evac_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
