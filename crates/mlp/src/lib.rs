#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Four-layer perceptron classifying a 28x28 grayscale image into a digit.
//!
//! The network is built from pretrained weights and is immutable afterwards;
//! classification is a deterministic, single-threaded pass over owned
//! [`Matrix`] values.
//!
//! Layout (important files):
//! - `activation.rs` — `relu`, `softmax` and the `Activation` capability
//! - `dense.rs` — `Dense` layer: `activation(weights x input + bias)`
//! - `network.rs` — `Network`, topology tables and the `Digit` result
//! - `loader.rs` — reading weight, bias and image files
//! - `logging.rs` — stderr subscriber setup for the binaries
//! - `bin/mlp.rs` — classify one image from the command line
//! - `bin/bench.rs` — timing harness over seeded random inputs

pub use linalg::{Matrix, MatrixError};

/// Elementwise activation functions.
pub mod activation;
/// Dense (affine + activation) layer.
pub mod dense;
/// Crate error type.
pub mod error;
/// Weight and image file loading.
pub mod loader;
/// Log subscriber installation for binaries.
pub mod logging;
/// The fixed four-layer network.
pub mod network;

pub use activation::{relu, softmax, Activation};
pub use dense::Dense;
pub use error::Error;
pub use network::{Digit, MatrixDims, Network, BIAS_DIMS, IMG_DIMS, MLP_SIZE, WEIGHTS_DIMS};
