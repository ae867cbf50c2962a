//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   elapsed_ms = tick * tick_duration_ms
//!
//! Using an integer tick as the canonical time unit means all cadence
//! arithmetic (hazard spread every N ticks, agent move every M ticks) is
//! exact — no floating-point drift, no frame-rate dependence — and the same
//! seed always replays the same run.
//!
//! The default tick duration is 100 ms.  The legacy real-time constants
//! (fire spread every 3 000 ms, one move every 200 ms) become 30-tick and
//! 2-tick cadences at that resolution; both are plain config fields.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 100 ms per tick, a u64 lasts ~58
/// billion years — far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated milliseconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.  Default: 100.
    pub tick_duration_ms: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_duration_ms: u32) -> Self {
        Self {
            tick_duration_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_ms as u64
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// How many ticks span `ms` milliseconds? (rounds up — a cadence derived
    /// from a real-time interval never fires early)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_duration_ms as u64)
    }

    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        self.ticks_for_ms(secs * 1_000)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t+{} ms)", self.current_tick, self.elapsed_ms())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// All engine knobs live here; components receive the values they need at
/// construction rather than reading process-wide state.  `Default` reproduces
/// the classic parameters: 20-px cells, fire spreading every 3 s, one move
/// every 200 ms, 100 starting health, 5 damage per burning step.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Edge length of one grid cell in floor-plan pixels.
    pub cell_size: u32,

    /// Simulated milliseconds per tick.
    pub tick_duration_ms: u32,

    /// Ticks between hazard spread passes.
    pub hazard_interval_ticks: u64,

    /// Ticks between agent movement steps.  Coarser than the tick so path
    /// re-planning can run faster than agents walk.
    pub move_interval_ticks: u64,

    /// Probability that a frontier neighbor ignites during a spread pass.
    /// `1.0` is the unconditional policy and consumes no randomness.
    pub spread_probability: f64,

    /// Extra path cost for entering a burning cell in allow-hazard planning.
    pub hazard_step_penalty: u32,

    /// Health lost per tick an agent's next queued cell is burning.
    pub hazard_damage: i32,

    /// Starting health of every agent.
    pub initial_health: i32,

    /// Hard stop: the run ends at this tick even if agents remain (e.g. an
    /// agent walled off from every exit).
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the planning pool.  `None` uses all logical
    /// cores.
    pub num_threads: Option<usize>,

    /// Emit an observer snapshot every N ticks.  1 = every tick.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size:               20,
            tick_duration_ms:        100,
            hazard_interval_ticks:   30, // 3 000 ms at 100 ms/tick
            move_interval_ticks:     2,  // 200 ms at 100 ms/tick
            spread_probability:      1.0,
            hazard_step_penalty:     10,
            hazard_damage:           5,
            initial_health:          100,
            max_ticks:               100_000,
            seed:                    0,
            num_threads:             None,
            snapshot_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation force-stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cell_size == 0 {
            return Err(CoreError::Config("cell_size must be positive".into()));
        }
        if self.tick_duration_ms == 0 {
            return Err(CoreError::Config("tick_duration_ms must be positive".into()));
        }
        if self.hazard_interval_ticks == 0 || self.move_interval_ticks == 0 {
            return Err(CoreError::Config(
                "hazard and move intervals must be at least one tick".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.spread_probability) {
            return Err(CoreError::Config(format!(
                "spread_probability {} outside [0, 1]",
                self.spread_probability
            )));
        }
        if self.hazard_damage <= 0 {
            return Err(CoreError::Config("hazard_damage must be positive".into()));
        }
        if self.initial_health <= 0 {
            return Err(CoreError::Config("initial_health must be positive".into()));
        }
        if self.max_ticks == 0 {
            return Err(CoreError::Config("max_ticks must be positive".into()));
        }
        Ok(())
    }
}
