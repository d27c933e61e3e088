//! One-time assembly of the diffusion operator from the grid topology.

use crate::edge::{resolve_axis, AxisBehavior};
use crate::geo::{haversine, DistanceUnit};
use crate::grid::LatLonGrid;
use crate::sparse::CscMatrix;
use clime_core::AssemblyError;
use smallvec::SmallVec;

/// Assemble the sparse diffusion operator for a grid.
///
/// For each cell `j` the stencil visits up to four lattice neighbours:
/// east (column decreasing, wraps), west (column increasing, wraps),
/// north (absent on row 0) and south (absent on the last row). Each
/// present neighbour `n` at great-circle distance `d_n` (kilometres)
/// receives the share `d_n / total` of column `j`, where `total` is the
/// sum over present neighbours. Shares reaching the same slot twice
/// accumulate (on a two-column grid, east and west are the same cell).
///
/// Every populated column therefore sums to 1: the operator
/// redistributes a cell's outgoing quantity without creating or
/// destroying any.
///
/// # Errors
///
/// `AssemblyError::DegenerateTopology` if a cell's total neighbour
/// distance is zero or non-finite (a 1x1 grid is the degenerate case:
/// its only neighbour is itself at distance zero).
pub fn assemble_diffusion(grid: &LatLonGrid) -> Result<CscMatrix, AssemblyError> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut triplets = Vec::with_capacity(grid.cell_count() * 4);

    for cell in grid.cells() {
        let row = i64::from(cell.row());
        let col = i64::from(cell.column());

        let east = resolve_axis(col - 1, cols, AxisBehavior::Wrap).map(|c| (cell.row(), c));
        let west = resolve_axis(col + 1, cols, AxisBehavior::Wrap).map(|c| (cell.row(), c));
        let north = resolve_axis(row - 1, rows, AxisBehavior::Absorb).map(|r| (r, cell.column()));
        let south = resolve_axis(row + 1, rows, AxisBehavior::Absorb).map(|r| (r, cell.column()));

        let mut neighbours: SmallVec<[(u32, f64); 4]> = SmallVec::new();
        for (n_row, n_col) in [east, west, north, south].into_iter().flatten() {
            let neighbour = grid.cell_at(n_row, n_col)?;
            let distance = haversine(cell.coord(), neighbour.coord(), DistanceUnit::Kilometres);
            neighbours.push((neighbour.index().0, distance));
        }

        let total: f64 = neighbours.iter().map(|&(_, d)| d).sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(AssemblyError::DegenerateTopology {
                index: cell.index(),
                total_distance: total,
            });
        }

        let j = cell.index().0;
        for (i, distance) in neighbours {
            triplets.push((i, j, distance / total));
        }
    }

    Ok(CscMatrix::from_triplets(grid.cell_count(), triplets))
}
