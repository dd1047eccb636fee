use std::fmt;

use crate::Matrix;

/// Values strictly above this are drawn as ink by [`Render`].
pub const RENDER_THRESHOLD: f32 = 0.1;

/// Plain print: each element followed by a space, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            for v in row {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Two-character-per-cell view of a matrix as a grayscale image.
///
/// Cells above [`RENDER_THRESHOLD`] print as `**`, the rest as two spaces.
#[derive(Clone, Copy, Debug)]
pub struct Render<'a> {
    matrix: &'a Matrix,
}

impl Matrix {
    /// Displayable image view of this matrix.
    pub fn render(&self) -> Render<'_> {
        Render { matrix: self }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.row_iter() {
            for &v in row {
                f.write_str(if v > RENDER_THRESHOLD { "**" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
