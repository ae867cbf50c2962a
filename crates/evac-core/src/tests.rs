//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ExitId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(ExitId(100) > ExitId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ExitId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn world_roundtrip() {
        let c = Cell::from_world(100, 60, 20);
        assert_eq!(c, Cell::new(5, 3));
        assert_eq!(c.origin(20), (100, 60));
    }

    #[test]
    fn from_world_truncates_within_cell() {
        // Any pixel inside the cell maps to the same cell.
        assert_eq!(Cell::from_world(119, 79, 20), Cell::new(5, 3));
    }

    #[test]
    fn negative_pixels_stay_negative() {
        assert_eq!(Cell::from_world(-1, -20, 20), Cell::new(-1, -1));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(5, 5)), 10);
        assert_eq!(Cell::new(3, 4).manhattan(Cell::new(3, 4)), 0);
        assert_eq!(Cell::new(-2, 0).manhattan(Cell::new(2, 0)), 4);
    }

    #[test]
    fn neighbors_are_adjacent() {
        let c = Cell::new(4, 4);
        for n in c.neighbors4() {
            assert_eq!(c.manhattan(n), 1);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, -3).to_string(), "(2, -3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(100);
        assert_eq!(clock.elapsed_ms(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 100);
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 200);
    }

    #[test]
    fn ticks_for_duration() {
        let clock = SimClock::new(100);
        assert_eq!(clock.ticks_for_ms(3_000), 30);
        assert_eq!(clock.ticks_for_secs(3), 30);
        // partial tick rounds up
        assert_eq!(clock.ticks_for_ms(1), 1);
        assert_eq!(clock.ticks_for_ms(101), 2);
    }

    #[test]
    fn default_config_matches_legacy_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.cell_size, 20);
        assert_eq!(cfg.hazard_interval_ticks, 30);
        assert_eq!(cfg.move_interval_ticks, 2);
        assert_eq!(cfg.hazard_damage, 5);
        assert_eq!(cfg.initial_health, 100);
        cfg.validate().unwrap();
    }

    #[test]
    fn config_rejects_bad_values() {
        let mut cfg = SimConfig::default();
        cfg.spread_probability = 1.5;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.cell_size = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.move_interval_ticks = 0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root1 = SimRng::new(1);
        let mut root2 = SimRng::new(1);
        let mut c0 = root1.child(0);
        let mut c1 = root2.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "children with different offsets should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
