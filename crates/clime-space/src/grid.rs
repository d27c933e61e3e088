//! The lat/lon grid: row-major cells with O(1) position lookups.

use crate::cell::Cell;
use crate::geo::GeoCoord;
use clime_core::{CellIndex, GridError};
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Initial altitude/temperature assignment for a freshly built grid.
///
/// All policies start every cell with albedo 0.5, humidity 0, pressure 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitPolicy {
    /// Altitude 0, temperature 10 everywhere.
    FlatZero,
    /// Altitude 1, temperature 10 everywhere.
    FlatOne,
    /// Altitude uniform in `{-2, -1, 0, 1, 2}` from a seeded RNG,
    /// temperature 30 everywhere. Identical seeds produce identical
    /// terrain.
    Random {
        /// RNG seed for deterministic terrain.
        seed: u64,
    },
}

/// A fixed grid of geographic cells in canonical row-major order.
///
/// Cell `(row, column)` sits at linear index `row * cols + column`.
/// Both geographic angles step by fractions of the ROW count
/// (`longitude = column * 360 / rows`, `latitude = 90 - row * 180 / rows`);
/// row 0 is the north pole row.
///
/// # Examples
///
/// ```
/// use clime_space::{InitPolicy, LatLonGrid};
///
/// let grid = LatLonGrid::new(4, 4, &InitPolicy::FlatZero).unwrap();
/// assert_eq!(grid.cell_count(), 16);
///
/// let cell = grid.cell_at(1, 2).unwrap();
/// assert_eq!(cell.index().as_usize(), 6);
/// assert_eq!(cell.coord().lon, 180.0);
/// assert_eq!(cell.coord().lat, 45.0);
/// ```
#[derive(Clone, Debug)]
pub struct LatLonGrid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl LatLonGrid {
    /// Build a `rows x cols` grid under the given initialization policy.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension
    /// is zero.
    pub fn new(rows: u32, cols: u32, policy: &InitPolicy) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let mut rng = match policy {
            InitPolicy::Random { seed } => Some(ChaCha8Rng::seed_from_u64(*seed)),
            _ => None,
        };

        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        let mut index = 0u32;
        for row in 0..rows {
            for column in 0..cols {
                // Both angular steps divide by the row count.
                let lon = f64::from(column) * 360.0 / f64::from(rows);
                let lat = 90.0 - f64::from(row) * 180.0 / f64::from(rows);
                let (temperature, altitude) = match policy {
                    InitPolicy::FlatZero => (10.0, 0),
                    InitPolicy::FlatOne => (10.0, 1),
                    InitPolicy::Random { .. } => {
                        let rng = rng.as_mut().expect("rng seeded for Random policy");
                        (30.0, rng.random_range(-2..3))
                    }
                };
                cells.push(Cell::new(
                    CellIndex(index),
                    row,
                    column,
                    GeoCoord::new(lon, lat),
                    temperature,
                    altitude,
                ));
                index += 1;
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Linear index of the cell at `(row, column)`.
    pub fn index_of(&self, row: u32, column: u32) -> Result<CellIndex, GridError> {
        if row >= self.rows || column >= self.cols {
            return Err(GridError::CellNotFound { row, column });
        }
        Ok(CellIndex(row * self.cols + column))
    }

    /// Cell by linear index.
    pub fn cell(&self, index: CellIndex) -> Result<&Cell, GridError> {
        self.cells
            .get(index.as_usize())
            .ok_or(GridError::IndexOutOfBounds {
                index,
                cell_count: self.cells.len(),
            })
    }

    /// Cell by `(row, column)` position.
    pub fn cell_at(&self, row: u32, column: u32) -> Result<&Cell, GridError> {
        let index = self.index_of(row, column)?;
        Ok(&self.cells[index.as_usize()])
    }

    /// Mutable cell by linear index.
    pub fn cell_mut(&mut self, index: CellIndex) -> Result<&mut Cell, GridError> {
        let cell_count = self.cells.len();
        self.cells
            .get_mut(index.as_usize())
            .ok_or(GridError::IndexOutOfBounds { index, cell_count })
    }

    /// Mutable cell by `(row, column)` position.
    pub fn cell_at_mut(&mut self, row: u32, column: u32) -> Result<&mut Cell, GridError> {
        let index = self.index_of(row, column)?;
        Ok(&mut self.cells[index.as_usize()])
    }

    /// All cells in canonical row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Bulk mutable access, for the per-tick projection pass.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
