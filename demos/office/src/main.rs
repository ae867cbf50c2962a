//! office — end-to-end demo for the evac_rs evacuation engine.
//!
//! Ten agents evacuate a partitioned 40×30 office while a fire spreads from
//! the left wing.  The only exit is in the bottom-right corner, so agents in
//! the left wing have to make it through the doorway before the fire cuts
//! the corridor off.  Pass a floor-plan path as the first argument to run
//! your own map instead of the embedded one.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use evac_core::{Cell, SimConfig, SimRng};
use evac_output::{CsvWriter, SimOutputObserver};
use evac_route::AStarPlanner;
use evac_sim::SimBuilder;
use evac_world::{load_plan, load_plan_reader, FloorPlan};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:    usize = 10;
const SEED:           u64   = 42;
const PLAN_WIDTH_PX:  u32   = 800;
const PLAN_HEIGHT_PX: u32   = 600;
const CELL_SIZE:      u32   = 20;
/// Real-time pacing, converted to tick cadences below.
const FIRE_SPREAD_MS: u64   = 3_000;
const MOVE_MS:        u64   = 200;
/// Where the fire starts: mid-height in the left wing.
const FIRE_SEED:      Cell  = Cell::new(5, 15);

// ── Embedded floor plan ───────────────────────────────────────────────────────

// A vertical partition at x=400 with a doorway at the bottom (y 420–580
// open).  Exit in the bottom-right corner, entry door bottom-left.
const OFFICE_JSON: &str = r#"{
  "walls": [
    {"x": 400, "y": 0},   {"x": 400, "y": 20},  {"x": 400, "y": 40},
    {"x": 400, "y": 60},  {"x": 400, "y": 80},  {"x": 400, "y": 100},
    {"x": 400, "y": 120}, {"x": 400, "y": 140}, {"x": 400, "y": 160},
    {"x": 400, "y": 180}, {"x": 400, "y": 200}, {"x": 400, "y": 220},
    {"x": 400, "y": 240}, {"x": 400, "y": 260}, {"x": 400, "y": 280},
    {"x": 400, "y": 300}, {"x": 400, "y": 320}, {"x": 400, "y": 340},
    {"x": 400, "y": 360}, {"x": 400, "y": 380}, {"x": 400, "y": 400}
  ],
  "exits":   [{"x": 780, "y": 580}],
  "entries": [{"x": 0, "y": 580}]
}"#;

// ── Agent placement ───────────────────────────────────────────────────────────

/// Spawn cells: the plan's entry doors first, then seeded-random free cells.
///
/// A spawn is never placed on a wall, an exit, the fire seed, or another
/// agent.
fn spawn_cells(plan: &FloorPlan, rng: &mut SimRng) -> Vec<Cell> {
    let grid = plan.grid();
    let mut spawns: Vec<Cell> = plan.entries.clone();
    spawns.truncate(AGENT_COUNT);

    while spawns.len() < AGENT_COUNT {
        let cell = Cell::new(
            rng.gen_range(0..grid.cols()),
            rng.gen_range(0..grid.rows()),
        );
        if grid.blocked(cell)
            || cell == FIRE_SEED
            || plan.exits.contains(&cell)
            || spawns.contains(&cell)
        {
            continue;
        }
        spawns.push(cell);
    }
    spawns
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== office — evac_rs evacuation demo ===");
    println!("Agents: {AGENT_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Load the floor plan (argument, or the embedded office).
    let plan = match std::env::args().nth(1) {
        Some(path) => load_plan(Path::new(&path), PLAN_WIDTH_PX, PLAN_HEIGHT_PX, CELL_SIZE)?,
        None => load_plan_reader(Cursor::new(OFFICE_JSON), PLAN_WIDTH_PX, PLAN_HEIGHT_PX, CELL_SIZE)?,
    };
    println!(
        "Floor plan: {}x{} cells, {} walls, {} exits",
        plan.cols,
        plan.rows,
        plan.walls.len(),
        plan.exits.len()
    );

    // 2. Sim config: classic cadences, deterministic seed.
    let base = SimConfig::default();
    let clock = base.make_clock();
    let config = SimConfig {
        seed:                  SEED,
        max_ticks:             5_000,
        hazard_interval_ticks: clock.ticks_for_ms(FIRE_SPREAD_MS),
        move_interval_ticks:   clock.ticks_for_ms(MOVE_MS),
        ..base
    };

    // 3. Place agents: entry doors first, then random free cells.
    let mut root = SimRng::new(SEED);
    let mut placement_rng = root.child(1);
    let spawns = spawn_cells(&plan, &mut placement_rng);
    println!("Spawned {} agents, fire seeded at {FIRE_SEED}", spawns.len());

    // 4. Build the sim.
    let mut sim = SimBuilder::from_plan(config.clone(), &plan, AStarPlanner::new(config.hazard_step_penalty))
        .spawns(spawns)
        .initial_fires(vec![FIRE_SEED])
        .build()?;

    // 5. Set up CSV output.
    std::fs::create_dir_all("output/office")?;
    let writer = CsvWriter::new(Path::new("output/office"))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 6. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Final agent table.
    println!();
    println!("{:<8} {:<8} {:<8} {:<10}", "Agent", "Status", "Health", "Cell");
    println!("{}", "-".repeat(36));
    for agent in sim.agents.agent_ids() {
        let i = agent.index();
        println!(
            "{:<8} {:<8} {:<8} {:<10}",
            agent.0,
            sim.agents.status[i].to_string(),
            sim.agents.health[i],
            sim.agents.cell[i].to_string(),
        );
    }

    // 8. Report.
    println!();
    println!(
        "Evacuation over after {} ({:.3} s wall clock)",
        sim.clock,
        elapsed.as_secs_f64()
    );
    println!("Total agents:  {}", report.total);
    println!("Saved agents:  {}", report.saved);
    println!("Lost agents:   {}", report.lost);
    println!("Survival rate: {:.2}%", report.survival_rate());

    Ok(())
}
