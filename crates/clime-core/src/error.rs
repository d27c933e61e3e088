//! Error types for grid construction, lookup, and matrix assembly.
//!
//! One hand-rolled enum per subsystem, with struct-variant context and
//! `source()` chaining where one subsystem wraps another. All failures
//! are programming or configuration errors; nothing here is retryable.

use crate::id::CellIndex;
use std::error::Error;
use std::fmt;

/// Errors from grid construction and cell lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Grid construction was asked for a zero-sized dimension.
    InvalidDimensions {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// No cell exists at the requested `(row, column)` position.
    CellNotFound {
        /// Requested row.
        row: u32,
        /// Requested column.
        column: u32,
    },
    /// A linear cell index is outside the grid.
    IndexOutOfBounds {
        /// The offending index.
        index: CellIndex,
        /// Number of cells in the grid.
        cell_count: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be non-zero, got {rows}x{cols}")
            }
            Self::CellNotFound { row, column } => {
                write!(f, "no cell at ({row}, {column})")
            }
            Self::IndexOutOfBounds { index, cell_count } => {
                write!(f, "cell index {index} out of bounds for {cell_count} cells")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from diffusion-matrix assembly.
#[derive(Clone, Debug, PartialEq)]
pub enum AssemblyError {
    /// A cell's total neighbor distance is zero or non-finite, so the
    /// inverse-distance shares cannot be normalized.
    DegenerateTopology {
        /// The cell whose neighborhood collapsed.
        index: CellIndex,
        /// The offending total distance.
        total_distance: f64,
    },
    /// A neighbor lookup failed while walking the stencil.
    Grid(GridError),
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTopology {
                index,
                total_distance,
            } => {
                write!(
                    f,
                    "degenerate topology at cell {index}: total neighbor distance {total_distance}"
                )
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for AssemblyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for AssemblyError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
