#![forbid(unsafe_code)]

use linalg::{Matrix, MatrixError};
use log::trace;
use serde::Serialize;

use crate::activation::{relu, softmax};
use crate::dense::Dense;

/// Number of dense layers in the network.
pub const MLP_SIZE: usize = 4;

/// Matrix dimensions as `(rows, cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixDims {
    /// row count
    pub rows: usize,
    /// column count
    pub cols: usize,
}

/// Input image shape.
pub const IMG_DIMS: MatrixDims = MatrixDims { rows: 28, cols: 28 };

/// Weight shapes per layer: 784 -> 128 -> 64 -> 20 -> 10.
pub const WEIGHTS_DIMS: [MatrixDims; MLP_SIZE] = [
    MatrixDims { rows: 128, cols: 784 },
    MatrixDims { rows: 64, cols: 128 },
    MatrixDims { rows: 20, cols: 64 },
    MatrixDims { rows: 10, cols: 20 },
];

/// Bias shapes per layer.
pub const BIAS_DIMS: [MatrixDims; MLP_SIZE] = [
    MatrixDims { rows: 128, cols: 1 },
    MatrixDims { rows: 64, cols: 1 },
    MatrixDims { rows: 20, cols: 1 },
    MatrixDims { rows: 10, cols: 1 },
];

/// Classified digit and the probability the network assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Digit {
    /// class index, 0-9
    pub value: usize,
    /// softmax output at `value`
    pub probability: f32,
}

/// Four dense layers: three `relu` hidden layers and a `softmax` output.
#[derive(Debug)]
pub struct Network {
    layers: [Dense; MLP_SIZE],
}

impl Network {
    /// Build the network from per-layer weights and biases, in layer order.
    ///
    /// Shapes are expected to follow [`WEIGHTS_DIMS`] and [`BIAS_DIMS`];
    /// mismatches are reported by [`Network::classify`].
    pub fn new(weights: [Matrix; MLP_SIZE], biases: [Matrix; MLP_SIZE]) -> Self {
        let [w1, w2, w3, w4] = weights;
        let [b1, b2, b3, b4] = biases;
        Self {
            layers: [
                Dense::new(w1, b1, relu),
                Dense::new(w2, b2, relu),
                Dense::new(w3, b3, relu),
                Dense::new(w4, b4, softmax),
            ],
        }
    }

    /// Network with seeded uniform weights scaled by `1/sqrt(fan_in)` and zero biases.
    pub fn random(seed: u64) -> Result<Self, MatrixError> {
        let weight = |layer: u64, dims: MatrixDims| -> Result<Matrix, MatrixError> {
            let scale = 1.0 / (dims.cols as f32).sqrt();
            Ok(Matrix::random(dims.rows, dims.cols, seed.wrapping_add(layer))? * scale)
        };
        let bias = |dims: MatrixDims| Matrix::new(dims.rows, dims.cols);

        let [w1, w2, w3, w4] = WEIGHTS_DIMS;
        let [b1, b2, b3, b4] = BIAS_DIMS;
        Ok(Self::new(
            [weight(0, w1)?, weight(1, w2)?, weight(2, w3)?, weight(3, w4)?],
            [bias(b1)?, bias(b2)?, bias(b3)?, bias(b4)?],
        ))
    }

    /// The layers in evaluation order.
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Thread a column vector through all four layers.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix, MatrixError> {
        self.layers
            .iter()
            .enumerate()
            .try_fold(input.clone(), |activation, (i, layer)| {
                let out = layer.forward(&activation)?;
                trace!("layer {}: {:?}", i + 1, out.shape());
                Ok(out)
            })
    }

    /// Classify `image`, which is reshaped in place into a single column first.
    pub fn classify(&self, image: &mut Matrix) -> Result<Digit, MatrixError> {
        image.vectorize();
        let output = self.forward(image)?;
        let value = output.argmax();
        let probability = output.at(value)?;
        Ok(Digit { value, probability })
    }

    /// Classify without reshaping the caller's matrix.
    pub fn classify_image(&self, image: &Matrix) -> Result<Digit, MatrixError> {
        self.classify(&mut image.clone())
    }
}
