#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use linalg::Matrix;
use log::{debug, warn};

use crate::error::Error;
use crate::network::{MatrixDims, Network, BIAS_DIMS, IMG_DIMS, MLP_SIZE, WEIGHTS_DIMS};

/// Load a `dims`-shaped matrix from a file of little-endian `f32` values.
///
/// A file shorter than `rows * cols` values fails with `InsufficientData`;
/// trailing bytes are ignored with a warning.
pub fn load_matrix(path: impl AsRef<Path>, dims: MatrixDims) -> Result<Matrix, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let matrix = Matrix::from_reader(dims.rows, dims.cols, &mut reader).map_err(|source| {
        Error::Load {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut probe = [0u8; 1];
    if matches!(reader.read(&mut probe), Ok(n) if n > 0) {
        warn!(
            "{}: trailing data after {}x{} values",
            path.display(),
            dims.rows,
            dims.cols
        );
    }
    debug!("loaded {} ({}x{})", path.display(), dims.rows, dims.cols);
    Ok(matrix)
}

/// Load a 28x28 image.
pub fn load_image(path: impl AsRef<Path>) -> Result<Matrix, Error> {
    load_matrix(path, IMG_DIMS)
}

fn load_set<P: AsRef<Path>>(
    paths: &[P; MLP_SIZE],
    dims: [MatrixDims; MLP_SIZE],
) -> Result<[Matrix; MLP_SIZE], Error> {
    let [p1, p2, p3, p4] = paths;
    let [d1, d2, d3, d4] = dims;
    Ok([
        load_matrix(p1, d1)?,
        load_matrix(p2, d2)?,
        load_matrix(p3, d3)?,
        load_matrix(p4, d4)?,
    ])
}

/// Load all four weight and bias files, in layer order, and build the network.
pub fn load_network<P: AsRef<Path>>(
    weights: &[P; MLP_SIZE],
    biases: &[P; MLP_SIZE],
) -> Result<Network, Error> {
    let weights = load_set(weights, WEIGHTS_DIMS)?;
    let biases = load_set(biases, BIAS_DIMS)?;
    Ok(Network::new(weights, biases))
}
