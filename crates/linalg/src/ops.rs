use std::ops::{Add, Mul, MulAssign};

use crate::{Matrix, MatrixError};

fn same_shape(op: &'static str, left: &Matrix, right: &Matrix) -> Result<(), MatrixError> {
    if left.shape() != right.shape() {
        return Err(MatrixError::SizeMismatch {
            op,
            left: left.shape(),
            right: right.shape(),
        });
    }
    Ok(())
}

impl Matrix {
    /// Elementwise sum. Both operands must have identical shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let mut sum = self.clone();
        sum.add_assign(other)?;
        Ok(sum)
    }

    /// Elementwise sum into `self`. On a shape mismatch `self` is unchanged.
    pub fn add_assign(&mut self, other: &Matrix) -> Result<&mut Self, MatrixError> {
        same_shape("add", self, other)?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(self)
    }

    /// Elementwise (Hadamard) product, not matrix multiplication.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        same_shape("dot", self, other)?;
        let mut product = self.clone();
        for (a, b) in product.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a *= b;
        }
        Ok(product)
    }

    /// Matrix product `self x other`; requires `self.cols() == other.rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::SizeMismatch {
                op: "matmul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut product = Matrix::new(self.rows(), other.cols())?;
        let out_cols = other.cols();
        for (lhs_row, out_row) in self
            .row_iter()
            .zip(product.as_mut_slice().chunks_exact_mut(out_cols))
        {
            for (j, out) in out_row.iter_mut().enumerate() {
                let column = other.as_slice().iter().skip(j).step_by(out_cols);
                *out = lhs_row.iter().zip(column).fold(0.0, |acc, (a, b)| acc + a * b);
            }
        }
        Ok(product)
    }

    /// Every element multiplied by `c`.
    pub fn scale(&self, c: f32) -> Matrix {
        let mut scaled = self.clone();
        scaled *= c;
        scaled
    }

    /// Frobenius norm: square root of the sum of squared elements.
    pub fn norm(&self) -> f32 {
        self.as_slice().iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f32 {
        self.as_slice().iter().sum()
    }

    /// Linear index of the greatest element.
    ///
    /// Scans in row-major order with a strict comparison, so the first of
    /// several equal maxima wins.
    pub fn argmax(&self) -> usize {
        let mut iter = self.as_slice().iter().enumerate();
        let Some((_, &first)) = iter.next() else {
            return 0;
        };
        let (index, _) = iter.fold((0, first), |(best_i, best), (i, &v)| {
            if v > best {
                (i, v)
            } else {
                (best_i, best)
            }
        });
        index
    }
}

impl MulAssign<f32> for Matrix {
    fn mul_assign(&mut self, c: f32) {
        self.as_mut_slice().iter_mut().for_each(|v| *v *= c);
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(mut self, c: f32) -> Matrix {
        self *= c;
        self
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, c: f32) -> Matrix {
        self.scale(c)
    }
}

impl Mul<Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, m: Matrix) -> Matrix {
        m * self
    }
}

impl Mul<&Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, m: &Matrix) -> Matrix {
        m.scale(self)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.matmul(rhs)
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}
