//! The immutable grid world.
//!
//! # Data layout
//!
//! Bounds are `cols × rows` cells of `cell_size` pixels each.  Walls live in
//! an `FxHashSet<Cell>` — wall density in real floor plans is sparse (a few
//! percent of cells), so a hash set beats a dense bitmap on memory and is
//! O(1) on the planner's hot `blocked` query.
//!
//! The wall set is fixed at construction.  Authoring (mouse editing, image
//! thresholding) happens in external tools before the simulation starts;
//! nothing in the engine mutates a `Grid`.

use evac_core::Cell;
use rustc_hash::FxHashSet;

/// Static world geometry: bounds plus the wall set.
///
/// Queries take `&self` only; a `Grid` shared across planner worker threads
/// needs no locking.
#[derive(Debug, Clone)]
pub struct Grid {
    cell_size: u32,
    cols: i32,
    rows: i32,
    walls: FxHashSet<Cell>,
}

impl Grid {
    /// Construct a grid of `cols × rows` cells with the given wall set.
    ///
    /// Out-of-bounds walls are not filtered here — the floor-plan loader
    /// rejects them up front, and synthetic test grids are expected to pass
    /// in-bounds cells.
    pub fn new(cols: u32, rows: u32, cell_size: u32, walls: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cell_size,
            cols: cols as i32,
            rows: rows as i32,
            walls: walls.into_iter().collect(),
        }
    }

    /// An open grid with no walls.
    pub fn open(cols: u32, rows: u32, cell_size: u32) -> Self {
        Self::new(cols, rows, cell_size, std::iter::empty())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `cell` lies inside the grid bounds.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }

    /// `true` if `cell` holds a wall.  Out-of-bounds cells are not walls;
    /// use [`blocked`][Self::blocked] for the combined check.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// `true` if `cell` cannot be entered: a wall, or outside the bounds.
    #[inline]
    pub fn blocked(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.walls.contains(&cell)
    }

    /// The cardinal neighbors of `cell` that lie inside the bounds.
    ///
    /// Walls are NOT filtered — hazard spread and the planner each apply
    /// their own passability rule on top.
    #[inline]
    pub fn neighbors4(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors4().into_iter().filter(|&c| self.in_bounds(c))
    }
}
