/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// A constructor was asked for a matrix with a zero dimension
    #[error("invalid matrix size {rows}x{cols}")]
    InvalidSize {
        /// requested row count
        rows: usize,
        /// requested column count
        cols: usize,
    },
    /// Operand shapes violate the operation's algebraic precondition
    #[error("matrix sizes are incompatible for {op}: {left:?} vs {right:?}")]
    SizeMismatch {
        /// name of the failed operation
        op: &'static str,
        /// (rows, cols) of the left operand
        left: (usize, usize),
        /// (rows, cols) of the right operand
        right: (usize, usize),
    },
    /// A (row, col) index fell outside the matrix
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        /// requested row
        row: usize,
        /// requested column
        col: usize,
        /// row count of the matrix
        rows: usize,
        /// column count of the matrix
        cols: usize,
    },
    /// A linear index fell outside the element store
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// requested linear index
        index: usize,
        /// number of elements in the matrix
        len: usize,
    },
    /// The input stream ended before every element was populated
    #[error("insufficient data for matrix elements: expected {expected}, read {read}")]
    InsufficientData {
        /// number of elements the matrix needs
        expected: usize,
        /// number of elements actually read
        read: usize,
    },
    /// Any other stream failure
    #[error("i/o error: {0:?}")]
    Io(std::io::ErrorKind),
}

/// Coarse classification of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shapes are incompatible with the requested operation
    SizeIncompatible,
    /// An index fell outside the current bounds
    OutOfRange,
    /// A stream was exhausted before the matrix was filled
    InsufficientData,
    /// The underlying reader or writer failed
    Io,
}

impl MatrixError {
    /// Which failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::InvalidSize { .. } | MatrixError::SizeMismatch { .. } => {
                ErrorKind::SizeIncompatible
            }
            MatrixError::OutOfRange { .. } | MatrixError::IndexOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            MatrixError::InsufficientData { .. } => ErrorKind::InsufficientData,
            MatrixError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for MatrixError {
    fn from(err: std::io::Error) -> Self {
        MatrixError::Io(err.kind())
    }
}
