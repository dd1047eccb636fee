use std::path::PathBuf;

use linalg::MatrixError;

/// Errors raised while loading or running the network.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A weight, bias or image file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// file that failed to open
        path: PathBuf,
        /// underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// A file opened but did not yield a valid matrix
    #[error("cannot load {}: {source}", path.display())]
    Load {
        /// file being read
        path: PathBuf,
        /// what went wrong while filling the matrix
        #[source]
        source: MatrixError,
    },
    /// Classification failed inside a layer
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
