#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Dense row-major `f32` matrices.
//!
//! Every fallible operation returns a `Result` carrying a [`MatrixError`];
//! element access is bounds-checked and never panics. Matrices own their
//! element store exclusively, so cloning is always a deep copy.
//!
//! Layout:
//! - `matrix.rs` — the `Matrix` container, construction, access, reshaping
//! - `ops.rs` — elementwise and matrix arithmetic, norm, sum, argmax
//! - `rref.rs` — Gauss-Jordan reduction to reduced row-echelon form
//! - `render.rs` — plain printing and thresholded image rendering
//! - `io.rs` — little-endian `f32` stream reading and writing

mod error;
mod io;
mod matrix;
mod ops;
mod render;
mod rref;

pub use error::{ErrorKind, MatrixError};
pub use matrix::Matrix;
pub use render::{Render, RENDER_THRESHOLD};
pub use rref::RREF_TOLERANCE;
