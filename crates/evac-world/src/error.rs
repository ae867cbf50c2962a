//! Error types for evac-world.

use evac_core::Cell;
use thiserror::Error;

/// Errors raised while loading or validating a floor plan.
///
/// All of these are fatal at startup: per the engine contract there is no
/// partially-loaded map state.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed floor plan document: {0}")]
    Format(#[from] serde_json::Error),

    #[error("invalid plan dimensions: {0}")]
    Dimensions(String),

    #[error("coordinate ({x}, {y}) is not aligned to the {cell_size}-px cell grid")]
    Misaligned { x: i32, y: i32, cell_size: u32 },

    #[error("cell {cell} lies outside the {cols}x{rows} grid")]
    OutOfBounds { cell: Cell, cols: i32, rows: i32 },
}

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;
