//! Integration tests for evac-output: run a small sim, read the files back.

use std::path::Path;

use evac_core::{Cell, SimConfig};
use evac_route::AStarPlanner;
use evac_sim::SimBuilder;
use evac_world::Grid;

use crate::{CsvWriter, SimOutputObserver};

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

/// Corridor run: agent 0 dies in the fire, agent 1 walks out.
fn run_fixture(dir: &Path) -> evac_agent::RunReport {
    let mut walls = Vec::new();
    for col in 0..6 {
        walls.push(Cell::new(col, 0));
        walls.push(Cell::new(col, 2));
    }
    let config = SimConfig {
        move_interval_ticks:   1,
        hazard_interval_ticks: 1_000,
        initial_health:        5,
        max_ticks:             100,
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config.clone(), Grid::new(6, 3, 20, walls), AStarPlanner::new(10))
        .exits(vec![Cell::new(5, 1)])
        .spawns(vec![Cell::new(0, 1), Cell::new(4, 1)])
        .initial_fires(vec![Cell::new(2, 1)])
        .build()
        .unwrap();

    let writer = CsvWriter::new(dir).unwrap();
    let mut obs = SimOutputObserver::new(writer, &config);
    let report = sim.run(&mut obs);
    assert!(obs.take_error().is_none(), "all writes must succeed");
    report
}

#[test]
fn report_file_matches_run_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_fixture(dir.path());
    assert_eq!(report.saved, 1);
    assert_eq!(report.lost, 1);

    let (headers, rows) = read_rows(&dir.path().join("run_report.csv"));
    assert_eq!(headers, ["total", "saved", "lost", "survival_rate_pct"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ["2", "1", "1", "50.00"]);
}

#[test]
fn snapshot_rows_cover_every_agent_every_tick() {
    let dir = tempfile::tempdir().unwrap();
    run_fixture(dir.path());

    let (headers, rows) = read_rows(&dir.path().join("agent_snapshots.csv"));
    assert_eq!(headers, ["agent_id", "tick", "col", "row", "health", "status"]);
    assert!(!rows.is_empty());
    // Two agents per snapshot tick, snapshots every tick.
    assert!(rows.len().is_multiple_of(2));
    // Status column carries the state machine vocabulary.
    for row in &rows {
        assert!(matches!(row[5].as_str(), "active" | "saved" | "lost"), "bad status {row:?}");
    }
    // The last snapshot of agent 0 shows it lost at zero health.
    let last_agent0 = rows.iter().rev().find(|r| r[0] == "0").unwrap();
    assert_eq!(last_agent0[4], "0");
    assert_eq!(last_agent0[5], "lost");
}

#[test]
fn tick_summaries_track_the_run() {
    let dir = tempfile::tempdir().unwrap();
    run_fixture(dir.path());

    let (headers, rows) = read_rows(&dir.path().join("tick_summaries.csv"));
    assert_eq!(headers, ["tick", "elapsed_ms", "live", "saved", "lost", "ignited_cells"]);
    assert!(!rows.is_empty());

    // Live counts never increase; the fire never shrinks.
    let live: Vec<u64> = rows.iter().map(|r| r[2].parse().unwrap()).collect();
    assert!(live.windows(2).all(|w| w[0] >= w[1]));
    let fire: Vec<u64> = rows.iter().map(|r| r[5].parse().unwrap()).collect();
    assert!(fire.windows(2).all(|w| w[0] <= w[1]));
    assert!(fire.iter().all(|&f| f >= 1), "the seed fire is always present");

    // elapsed_ms is tick * tick_duration (default 100 ms).
    let first: Vec<u64> = rows[0].iter().take(2).map(|v| v.parse().unwrap()).collect();
    assert_eq!(first[1], first[0] * 100);
}
