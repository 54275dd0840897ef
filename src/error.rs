use std::error::Error;
use std::fmt;

/// Failure modes of vector and matrix operations.
///
/// Every fallible operation reports one of these through its `Result`;
/// nothing is printed and no placeholder value is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecMatError {
    /// The operands have incompatible lengths or shapes.
    DimensionMismatch { expected: usize, found: usize },
    /// An index argument lies outside the valid range.
    OutOfBounds { index: usize, len: usize },
    /// The operation needs at least one column.
    EmptyMatrix,
    /// No determinant algorithm exists for this square size.
    Unsupported { rows: usize, cols: usize },
    /// The determinant is only defined for square matrices.
    NotSquare { rows: usize, cols: usize },
    /// A projection or angle was requested against a zero-magnitude vector.
    DivisionByZero,
}

impl fmt::Display for VecMatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VecMatError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            VecMatError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            VecMatError::EmptyMatrix => write!(f, "matrix has no columns"),
            VecMatError::Unsupported { rows, cols } => {
                write!(f, "no determinant algorithm for a {}x{} matrix", rows, cols)
            }
            VecMatError::NotSquare { rows, cols } => {
                write!(f, "matrix is {}x{}, not square", rows, cols)
            }
            VecMatError::DivisionByZero => write!(f, "operand has zero magnitude"),
        }
    }
}

impl Error for VecMatError {}
