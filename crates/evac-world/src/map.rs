//! JSON floor-plan loader.
//!
//! # Document format
//!
//! The map editor saves cell origins in pixel coordinates (multiples of the
//! cell size):
//!
//! ```json
//! {
//!   "walls":   [{"x": 100, "y": 60}, {"x": 120, "y": 60}],
//!   "exits":   [{"x": 780, "y": 580}],
//!   "entries": [{"x": 0, "y": 0}]
//! }
//! ```
//!
//! `exits` and `entries` are optional.  A plan without `exits` gets the
//! single bottom-right corner cell, matching the older editors that had a
//! predefined exit.  The oldest editor wrote a bare wall array
//! (`[{"x", "y"}, …]`); that form still loads, with no exits or entries.
//!
//! # Validation
//!
//! Every coordinate must be aligned to the cell grid and fall inside the
//! plan bounds.  Any violation aborts the load — a half-validated map must
//! never reach the simulation.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use evac_core::Cell;

use crate::{Grid, WorldError, WorldResult};

// ── Document records ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PixelCoord {
    x: i32,
    y: i32,
}

/// The two on-disk shapes: the structured document and the legacy bare wall
/// array.  `untagged` tries them in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum MapDocument {
    Full {
        walls: Vec<PixelCoord>,
        #[serde(default)]
        exits: Vec<PixelCoord>,
        #[serde(default)]
        entries: Vec<PixelCoord>,
    },
    Legacy(Vec<PixelCoord>),
}

// ── FloorPlan ─────────────────────────────────────────────────────────────────

/// A fully validated floor plan, ready to become a [`Grid`].
#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub cell_size: u32,
    pub cols: u32,
    pub rows: u32,
    pub walls: Vec<Cell>,
    /// Terminal cells: an agent occupying one is saved.  Never empty — a
    /// plan without exits gets the default corner cell.
    pub exits: Vec<Cell>,
    /// Optional spawn cells for multi-level scenarios.  May be empty.
    pub entries: Vec<Cell>,
}

impl FloorPlan {
    /// Build the wall grid for this plan.
    pub fn grid(&self) -> Grid {
        Grid::new(self.cols, self.rows, self.cell_size, self.walls.iter().copied())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a floor plan from `path`.
///
/// `width_px`/`height_px` are the plan bounds in pixels (the editor's canvas
/// size); both must be positive multiples of `cell_size`.
pub fn load_plan(
    path: &Path,
    width_px: u32,
    height_px: u32,
    cell_size: u32,
) -> WorldResult<FloorPlan> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_plan_reader(file, width_px, height_px, cell_size)
}

/// Like [`load_plan`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded documents.
pub fn load_plan_reader<R: Read>(
    reader: R,
    width_px: u32,
    height_px: u32,
    cell_size: u32,
) -> WorldResult<FloorPlan> {
    let (cols, rows) = plan_dimensions(width_px, height_px, cell_size)?;

    let document: MapDocument = serde_json::from_reader(reader)?;
    let (walls, exits, entries) = match document {
        MapDocument::Full { walls, exits, entries } => (walls, exits, entries),
        MapDocument::Legacy(walls) => (walls, vec![], vec![]),
    };

    let walls = to_cells(&walls, cols, rows, cell_size)?;
    let mut exits = to_cells(&exits, cols, rows, cell_size)?;
    let entries = to_cells(&entries, cols, rows, cell_size)?;

    if exits.is_empty() {
        // Default predefined exit: the bottom-right corner cell.
        exits.push(Cell::new(cols as i32 - 1, rows as i32 - 1));
    }

    log::debug!(
        "loaded floor plan: {cols}x{rows} cells, {} walls, {} exits, {} entries",
        walls.len(),
        exits.len(),
        entries.len(),
    );

    Ok(FloorPlan { cell_size, cols, rows, walls, exits, entries })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plan_dimensions(width_px: u32, height_px: u32, cell_size: u32) -> WorldResult<(u32, u32)> {
    if cell_size == 0 {
        return Err(WorldError::Dimensions("cell_size must be positive".into()));
    }
    if width_px == 0 || height_px == 0 {
        return Err(WorldError::Dimensions(format!(
            "plan bounds {width_px}x{height_px} must be positive"
        )));
    }
    if width_px % cell_size != 0 || height_px % cell_size != 0 {
        return Err(WorldError::Dimensions(format!(
            "plan bounds {width_px}x{height_px} do not fit a whole number of {cell_size}-px cells"
        )));
    }
    Ok((width_px / cell_size, height_px / cell_size))
}

fn to_cells(
    coords: &[PixelCoord],
    cols: u32,
    rows: u32,
    cell_size: u32,
) -> WorldResult<Vec<Cell>> {
    let s = cell_size as i32;
    coords
        .iter()
        .map(|c| {
            if c.x.rem_euclid(s) != 0 || c.y.rem_euclid(s) != 0 {
                return Err(WorldError::Misaligned { x: c.x, y: c.y, cell_size });
            }
            let cell = Cell::from_world(c.x, c.y, cell_size);
            let in_bounds =
                (0..cols as i32).contains(&cell.col) && (0..rows as i32).contains(&cell.row);
            if !in_bounds {
                return Err(WorldError::OutOfBounds {
                    cell,
                    cols: cols as i32,
                    rows: rows as i32,
                });
            }
            Ok(cell)
        })
        .collect()
}
