//! Compressed-sparse-column matrix storage and matrix-vector product.
//!
//! The diffusion operator is a square sparse matrix with a handful of
//! entries per column. At this size a hand-rolled CSC layout plus one
//! matvec routine beats pulling in a linear-algebra dependency.

use clime_core::CellIndex;
use indexmap::IndexMap;

/// A square sparse matrix in compressed-sparse-column form.
///
/// Entry `(i, j)` holds the share of column `j`'s outgoing quantity that
/// flows to row `i`. Row indices within each column are stored in
/// ascending order. Built once via [`CscMatrix::from_triplets`];
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CscMatrix {
    dim: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<u32>,
    weights: Vec<f64>,
}

impl CscMatrix {
    /// Build a `dim x dim` matrix from `(row, column, weight)` triplets.
    ///
    /// Duplicate `(row, column)` slots ACCUMULATE — a slot reached twice
    /// holds the sum of its contributions, not the last one. Insertion
    /// order does not affect the result; rows are sorted per column.
    ///
    /// # Panics
    ///
    /// Panics if a triplet indexes outside `dim` (assembly feeds this
    /// from an already-validated grid).
    pub fn from_triplets(dim: usize, triplets: impl IntoIterator<Item = (u32, u32, f64)>) -> Self {
        let mut columns: Vec<IndexMap<u32, f64>> = vec![IndexMap::new(); dim];
        for (row, col, weight) in triplets {
            assert!(
                (row as usize) < dim && (col as usize) < dim,
                "triplet ({row}, {col}) outside {dim}x{dim} matrix"
            );
            *columns[col as usize].entry(row).or_insert(0.0) += weight;
        }

        let nnz: usize = columns.iter().map(|column| column.len()).sum();
        let mut col_ptr = Vec::with_capacity(dim + 1);
        let mut row_idx = Vec::with_capacity(nnz);
        let mut weights = Vec::with_capacity(nnz);

        col_ptr.push(0);
        for column in &mut columns {
            column.sort_unstable_keys();
            for (&row, &weight) in column.iter() {
                row_idx.push(row);
                weights.push(weight);
            }
            col_ptr.push(row_idx.len());
        }

        Self {
            dim,
            col_ptr,
            row_idx,
            weights,
        }
    }

    /// Matrix dimension (rows == columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.row_idx.len()
    }

    /// Iterate the populated entries of column `j` as `(row, weight)`,
    /// row indices ascending.
    pub fn column(&self, j: usize) -> impl Iterator<Item = (CellIndex, f64)> + '_ {
        let range = self.col_ptr[j]..self.col_ptr[j + 1];
        self.row_idx[range.clone()]
            .iter()
            .zip(&self.weights[range])
            .map(|(&row, &weight)| (CellIndex(row), weight))
    }

    /// Sum of the populated entries of column `j`.
    pub fn column_sum(&self, j: usize) -> f64 {
        let range = self.col_ptr[j]..self.col_ptr[j + 1];
        self.weights[range].iter().sum()
    }

    /// Dense matrix-vector product `y = A * x`.
    ///
    /// `x` and `y` must both have length [`dim`](Self::dim); `y` is
    /// overwritten.
    pub fn mul_vec(&self, x: &[f64], y: &mut [f64]) {
        assert_eq!(x.len(), self.dim, "input vector length mismatch");
        assert_eq!(y.len(), self.dim, "output vector length mismatch");

        y.fill(0.0);
        for j in 0..self.dim {
            let xj = x[j];
            if xj == 0.0 {
                continue;
            }
            for k in self.col_ptr[j]..self.col_ptr[j + 1] {
                y[self.row_idx[k] as usize] += self.weights[k] * xj;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn duplicate_slots_accumulate() {
        let m = CscMatrix::from_triplets(3, [(1, 0, 0.25), (1, 0, 0.25), (2, 0, 0.5)]);
        assert_eq!(m.nnz(), 2);
        let col: Vec<_> = m.column(0).collect();
        assert_eq!(col, vec![(CellIndex(1), 0.5), (CellIndex(2), 0.5)]);
    }

    #[test]
    fn rows_within_a_column_are_sorted() {
        let m = CscMatrix::from_triplets(4, [(3, 1, 1.0), (0, 1, 2.0), (2, 1, 3.0)]);
        let rows: Vec<_> = m.column(1).map(|(r, _)| r.as_usize()).collect();
        assert_eq!(rows, vec![0, 2, 3]);
    }

    #[test]
    fn empty_columns_are_fine() {
        let m = CscMatrix::from_triplets(3, [(0, 2, 1.0)]);
        assert_eq!(m.column(0).count(), 0);
        assert_eq!(m.column(1).count(), 0);
        assert_eq!(m.column_sum(1), 0.0);
        assert_eq!(m.column(2).count(), 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_triplet_panics() {
        let _ = CscMatrix::from_triplets(2, [(2, 0, 1.0)]);
    }

    // ── Matvec ──────────────────────────────────────────────────

    #[test]
    fn mul_vec_matches_hand_computation() {
        // [ 0    0.5  0 ]
        // [ 1.0  0    0 ]
        // [ 0    0.5  0 ]
        let m = CscMatrix::from_triplets(3, [(1, 0, 1.0), (0, 1, 0.5), (2, 1, 0.5)]);
        let x = [2.0, 4.0, 8.0];
        let mut y = [0.0; 3];
        m.mul_vec(&x, &mut y);
        assert_eq!(y, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn mul_vec_overwrites_stale_output() {
        let m = CscMatrix::from_triplets(2, [(0, 0, 1.0)]);
        let mut y = [7.0, 7.0];
        m.mul_vec(&[3.0, 5.0], &mut y);
        assert_eq!(y, [3.0, 0.0]);
    }

    // ── Property tests ──────────────────────────────────────────

    /// A random matrix whose columns each sum to 1, as the diffusion
    /// assembler produces.
    fn arb_stochastic_columns() -> impl Strategy<Value = (CscMatrix, Vec<f64>)> {
        (2usize..8).prop_flat_map(|dim| {
            let triplets = proptest::collection::vec((0u32..dim as u32, 0.1f64..10.0), dim);
            let x = proptest::collection::vec(-100.0f64..100.0, dim);
            (triplets, x).prop_map(move |(raw, x)| {
                // One raw (row, magnitude) pair per column, padded so
                // every column sums to exactly 1.
                let mut triplets = Vec::new();
                for (j, (row, magnitude)) in raw.into_iter().enumerate() {
                    let other = (row as usize + 1) % dim;
                    let share = magnitude / (magnitude + 1.0);
                    triplets.push((row, j as u32, share));
                    triplets.push((other as u32, j as u32, 1.0 - share));
                }
                (CscMatrix::from_triplets(dim, triplets), x)
            })
        })
    }

    proptest! {
        #[test]
        fn stochastic_columns_conserve_mass((m, x) in arb_stochastic_columns()) {
            let mut y = vec![0.0; m.dim()];
            m.mul_vec(&x, &mut y);
            let before: f64 = x.iter().sum();
            let after: f64 = y.iter().sum();
            prop_assert!((before - after).abs() < 1e-9 * (1.0 + before.abs()));
        }
    }
}
