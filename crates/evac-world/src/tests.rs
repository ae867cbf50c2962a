//! Unit tests for evac-world.

#[cfg(test)]
mod grid {
    use evac_core::Cell;

    use crate::Grid;

    #[test]
    fn bounds_checks() {
        let g = Grid::open(40, 30, 20);
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(g.in_bounds(Cell::new(39, 29)));
        assert!(!g.in_bounds(Cell::new(40, 0)));
        assert!(!g.in_bounds(Cell::new(0, 30)));
        assert!(!g.in_bounds(Cell::new(-1, 5)));
    }

    #[test]
    fn walls_block() {
        let g = Grid::new(10, 10, 20, [Cell::new(3, 3)]);
        assert!(g.is_wall(Cell::new(3, 3)));
        assert!(g.blocked(Cell::new(3, 3)));
        assert!(!g.blocked(Cell::new(3, 4)));
        assert_eq!(g.wall_count(), 1);
    }

    #[test]
    fn out_of_bounds_is_blocked_but_not_wall() {
        let g = Grid::open(10, 10, 20);
        let outside = Cell::new(10, 10);
        assert!(g.blocked(outside));
        assert!(!g.is_wall(outside));
    }

    #[test]
    fn neighbors_clipped_at_corner() {
        let g = Grid::open(10, 10, 20);
        let corner: Vec<Cell> = g.neighbors4(Cell::new(0, 0)).collect();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Cell::new(1, 0)));
        assert!(corner.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn neighbors_do_not_filter_walls() {
        let g = Grid::new(10, 10, 20, [Cell::new(5, 4)]);
        let around: Vec<Cell> = g.neighbors4(Cell::new(5, 5)).collect();
        assert_eq!(around.len(), 4);
        assert!(around.contains(&Cell::new(5, 4)), "wall neighbor still listed");
    }
}

#[cfg(test)]
mod map {
    use std::io::Cursor;

    use evac_core::Cell;

    use crate::{load_plan, load_plan_reader, WorldError};

    fn load(json: &str) -> Result<crate::FloorPlan, WorldError> {
        load_plan_reader(Cursor::new(json), 800, 600, 20)
    }

    #[test]
    fn full_document_loads() {
        let plan = load(
            r#"{
                "walls":   [{"x": 100, "y": 60}, {"x": 120, "y": 60}],
                "exits":   [{"x": 780, "y": 580}],
                "entries": [{"x": 0, "y": 0}]
            }"#,
        )
        .unwrap();
        assert_eq!(plan.cols, 40);
        assert_eq!(plan.rows, 30);
        assert_eq!(plan.walls, vec![Cell::new(5, 3), Cell::new(6, 3)]);
        assert_eq!(plan.exits, vec![Cell::new(39, 29)]);
        assert_eq!(plan.entries, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn legacy_bare_array_loads_as_walls() {
        let plan = load(r#"[{"x": 0, "y": 0}, {"x": 20, "y": 0}]"#).unwrap();
        assert_eq!(plan.walls, vec![Cell::new(0, 0), Cell::new(1, 0)]);
        assert!(plan.entries.is_empty());
    }

    #[test]
    fn missing_exits_default_to_corner() {
        let plan = load(r#"{"walls": []}"#).unwrap();
        assert_eq!(plan.exits, vec![Cell::new(39, 29)]);
    }

    #[test]
    fn grid_from_plan_blocks_walls() {
        let plan = load(r#"{"walls": [{"x": 40, "y": 40}]}"#).unwrap();
        let grid = plan.grid();
        assert!(grid.blocked(Cell::new(2, 2)));
        assert!(!grid.blocked(Cell::new(2, 3)));
    }

    #[test]
    fn misaligned_coordinate_rejected() {
        let err = load(r#"{"walls": [{"x": 13, "y": 40}]}"#).unwrap_err();
        assert!(matches!(err, WorldError::Misaligned { x: 13, y: 40, .. }));
    }

    #[test]
    fn out_of_bounds_coordinate_rejected() {
        let err = load(r#"{"walls": [{"x": 800, "y": 0}]}"#).unwrap_err();
        assert!(matches!(err, WorldError::OutOfBounds { .. }));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = load(r#"{"walls": [{"x": }"#).unwrap_err();
        assert!(matches!(err, WorldError::Format(_)));
    }

    #[test]
    fn bad_dimensions_rejected() {
        let err = load_plan_reader(Cursor::new("[]"), 810, 600, 20).unwrap_err();
        assert!(matches!(err, WorldError::Dimensions(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_plan(std::path::Path::new("does-not-exist.json"), 800, 600, 20)
            .unwrap_err();
        assert!(matches!(err, WorldError::Io(_)));
    }
}
