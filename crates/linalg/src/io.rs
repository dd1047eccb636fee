use std::io::{ErrorKind, Read, Write};

use crate::{Matrix, MatrixError};

impl Matrix {
    /// Fill the matrix in row-major order from little-endian `f32` values.
    ///
    /// Exactly `rows * cols` values are consumed. If the stream ends first
    /// the result is `InsufficientData` and `self` is left unchanged.
    pub fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<&mut Self, MatrixError> {
        let expected = self.size();
        let mut values = Vec::with_capacity(expected);
        let mut buf = [0u8; 4];
        while values.len() < expected {
            match reader.read_exact(&mut buf) {
                Ok(()) => values.push(f32::from_le_bytes(buf)),
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(MatrixError::InsufficientData {
                        expected,
                        read: values.len(),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
        self.as_mut_slice().copy_from_slice(&values);
        Ok(self)
    }

    /// New `rows x cols` matrix read from `reader`; see [`Matrix::read_from`].
    pub fn from_reader<R: Read>(
        rows: usize,
        cols: usize,
        reader: &mut R,
    ) -> Result<Self, MatrixError> {
        let mut m = Matrix::new(rows, cols)?;
        m.read_from(reader)?;
        Ok(m)
    }

    /// Write every element as little-endian `f32`, row-major.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), MatrixError> {
        for v in self.as_slice() {
            writer.write_all(&v.to_le_bytes())?;
        }
        Ok(())
    }
}
