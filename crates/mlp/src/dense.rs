#![forbid(unsafe_code)]

use std::fmt;

use linalg::{Matrix, MatrixError};

use crate::activation::Activation;

/// Dense layer: `out = activation(weights x input + bias)`.
///
/// Owns its weight and bias matrices; evaluation never mutates the layer.
pub struct Dense {
    weights: Matrix,
    bias: Matrix,
    activation: Box<dyn Activation>,
}

impl Dense {
    /// Bind weights, bias and an activation into a layer.
    ///
    /// Shapes are not checked here; incompatible shapes surface as a
    /// `SizeMismatch` from [`Dense::forward`].
    pub fn new(weights: Matrix, bias: Matrix, activation: impl Activation + 'static) -> Self {
        Self {
            weights,
            bias,
            activation: Box::new(activation),
        }
    }

    /// Weight matrix (out_dim x in_dim).
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Bias column (out_dim x 1).
    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    /// The bound activation.
    pub fn activation(&self) -> &dyn Activation {
        self.activation.as_ref()
    }

    /// Forward pass for a single input column.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix, MatrixError> {
        let mut affine = self.weights.matmul(input)?;
        affine.add_assign(&self.bias)?;
        Ok(self.activation.activate(&affine))
    }
}

impl fmt::Debug for Dense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dense")
            .field("weights", &self.weights.shape())
            .field("bias", &self.bias.shape())
            .finish_non_exhaustive()
    }
}
