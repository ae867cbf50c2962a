//! `evac-sim` — tick loop orchestrator for the evac_rs engine.
//!
//! # The tick loop
//!
//! ```text
//! while live agents remain (and tick < max_ticks):
//!   ① Hazard   — spread pass if the hazard cadence elapsed (own interval).
//!   ② Snapshot — grid + hazard held immutable for the rest of the tick.
//!   ③ Plan     — one route computation per Active agent, fanned out across
//!                the worker pool (`parallel` feature); avoid-hazard first,
//!                allow-hazard fallback, nearest exit first.
//!   ④ Join     — the collect barrier; no agent state written before it.
//!   ⑤ Apply    — sequential, ascending AgentId: assign path, exit check,
//!                hazard damage, cadenced move; terminal transitions go to
//!                a side list.
//!   ⑥ Sweep    — mark all terminal agents and tally the report in one step.
//! ```
//!
//! All mutation happens in phases ①, ⑤ and ⑥ on the orchestrator thread;
//! the parallel phase ③ reads shared state only.  That ordering — hazard
//! writes happen-before planning reads happen-before agent writes — is what
//! makes runs deterministic regardless of worker count.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | (default) Runs the planning phase on a Rayon pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_core::{Cell, SimConfig};
//! use evac_route::AStarPlanner;
//! use evac_sim::{NoopObserver, SimBuilder};
//! use evac_world::Grid;
//!
//! let config = SimConfig::default();
//! let grid = Grid::open(40, 30, config.cell_size);
//! let report = SimBuilder::new(config, grid, AStarPlanner::new(10))
//!     .exits(vec![Cell::new(39, 29)])
//!     .spawns(vec![Cell::new(0, 0)])
//!     .build()?
//!     .run(&mut NoopObserver);
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{plan_with_fallback, CellKind, Sim};
