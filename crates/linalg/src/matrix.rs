use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::MatrixError;

/// A dense, rectangular matrix of `f32` values stored in row-major order.
///
/// Both dimensions are at least 1 and the store always holds exactly
/// `rows * cols` elements. `Clone` produces an independent store.
///
/// ```
/// use linalg::Matrix;
///
/// let mut m = Matrix::new(2, 3)?;
/// *m.get_mut(1, 2)? = 4.0;
/// assert_eq!(m.at(5)?, 4.0);
/// assert!(m.get(2, 0).is_err());
/// # Ok::<(), linalg::MatrixError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

// Unchecked wire form; converted through `from_vec` so the shape invariant holds.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

fn element_count(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidSize { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::InvalidSize { rows, cols })
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix. Fails if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Build a matrix from row-major `data`.
    ///
    /// Fails with `InvalidSize` on a zero dimension and with `SizeMismatch`
    /// when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, MatrixError> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::SizeMismatch {
                op: "from_vec",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::new(n, n)?;
        m.data
            .iter_mut()
            .step_by(n + 1)
            .for_each(|v| *v = 1.0);
        Ok(m)
    }

    /// Matrix filled with values drawn uniformly from `[-1, 1)`.
    ///
    /// Deterministic per `seed`.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Result<Self, MatrixError> {
        let mut m = Self::new(rows, cols)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for v in m.data.iter_mut() {
            *v = rng.gen_range(-1.0..1.0);
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements, `rows * cols`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, MatrixError> {
        let k = self.offset(row, col)?;
        self.at(k)
    }

    /// Mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f32, MatrixError> {
        let k = self.offset(row, col)?;
        self.at_mut(k)
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Element at linear row-major index `k`, regardless of declared shape.
    pub fn at(&self, k: usize) -> Result<f32, MatrixError> {
        self.data
            .get(k)
            .copied()
            .ok_or(MatrixError::IndexOutOfRange {
                index: k,
                len: self.data.len(),
            })
    }

    /// Mutable reference to the element at linear index `k`.
    pub fn at_mut(&mut self, k: usize) -> Result<&mut f32, MatrixError> {
        let len = self.data.len();
        self.data
            .get_mut(k)
            .ok_or(MatrixError::IndexOutOfRange { index: k, len })
    }

    /// The element store in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable element store. The shape cannot be changed through it.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterator over rows as slices.
    pub fn row_iter(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.cols)
    }

    /// Transpose in place; dimensions swap.
    pub fn transpose(&mut self) -> &mut Self {
        let cols = self.cols;
        let data = &self.data;
        let transposed: Vec<f32> = (0..cols)
            .flat_map(move |c| data.iter().skip(c).step_by(cols).copied())
            .collect();
        self.data = transposed;
        std::mem::swap(&mut self.rows, &mut self.cols);
        self
    }

    /// Transposed copy; `self` is left untouched.
    pub fn transposed(&self) -> Self {
        let mut t = self.clone();
        t.transpose();
        t
    }

    /// Reshape in place into a single `rows * cols` column.
    ///
    /// The store is already linear, so no element moves.
    pub fn vectorize(&mut self) -> &mut Self {
        self.rows = self.data.len();
        self.cols = 1;
        self
    }

    /// Column-vector copy; `self` is left untouched.
    pub fn vectorized(&self) -> Self {
        let mut v = self.clone();
        v.vectorize();
        v
    }
}

impl Default for Matrix {
    /// A 1x1 zero matrix.
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![0.0],
        }
    }
}
