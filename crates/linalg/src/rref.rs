use log::trace;

use crate::Matrix;

/// Magnitude below which the final RREF cleanup snaps an element to zero.
pub const RREF_TOLERANCE: f32 = 1e-3;

impl Matrix {
    /// Reduced row-echelon form via Gauss-Jordan elimination.
    ///
    /// Works on a copy; `self` is never modified. The pivot for a column is
    /// the first non-zero entry at or below the current row (no magnitude
    /// pivoting). When every remaining column has been tried the reduction
    /// stops and returns the working copy as-is. Otherwise, once all rows are
    /// processed, elements with magnitude below [`RREF_TOLERANCE`] are
    /// snapped to zero.
    pub fn rref(&self) -> Matrix {
        let mut reduced = self.clone();
        let (rows, cols) = reduced.shape();

        let mut lead = 0;
        let mut row = 0;
        while row < rows {
            if lead >= cols {
                trace!("rref: columns exhausted at row {row}");
                return reduced;
            }
            match reduced.find_pivot_row(row, lead) {
                Some(pivot) => {
                    reduced.swap_rows(pivot, row);
                    reduced.normalize_row(row, lead);
                    reduced.eliminate(row, lead);
                    lead += 1;
                    row += 1;
                }
                None => {
                    // retry the same row against the next column
                    lead += 1;
                    if lead == cols {
                        trace!("rref: no pivot left from row {row}");
                        return reduced;
                    }
                }
            }
        }

        reduced.snap_small_values();
        reduced
    }

    fn find_pivot_row(&self, from: usize, lead: usize) -> Option<usize> {
        self.row_iter()
            .enumerate()
            .skip(from)
            .find(|(_, values)| values.get(lead).is_some_and(|&v| v != 0.0))
            .map(|(r, _)| r)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols();
        let data = self.as_mut_slice();
        for c in 0..cols {
            data.swap(a * cols + c, b * cols + c);
        }
    }

    fn normalize_row(&mut self, row: usize, lead: usize) {
        let cols = self.cols();
        if let Some(values) = self.as_mut_slice().chunks_exact_mut(cols).nth(row) {
            let pivot = values.get(lead).copied().unwrap_or(1.0);
            values.iter_mut().for_each(|v| *v /= pivot);
        }
    }

    fn eliminate(&mut self, pivot_row: usize, lead: usize) {
        let cols = self.cols();
        let pivot: Vec<f32> = self
            .row_iter()
            .nth(pivot_row)
            .map(<[f32]>::to_vec)
            .unwrap_or_default();
        for (r, values) in self.as_mut_slice().chunks_exact_mut(cols).enumerate() {
            if r == pivot_row {
                continue;
            }
            let factor = values.get(lead).copied().unwrap_or(0.0);
            for (v, p) in values.iter_mut().zip(&pivot) {
                *v -= factor * p;
            }
        }
    }

    fn snap_small_values(&mut self) {
        for v in self.as_mut_slice() {
            if v.abs() < RREF_TOLERANCE {
                *v = 0.0;
            }
        }
    }
}
