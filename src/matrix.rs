use std::fmt;

use log::debug;

use crate::error::VecMatError;
use crate::vector::Vector;


/// A column-major matrix: an owned sequence of equal-length column vectors.
///
/// The equal-length invariant is checked at construction, so every later
/// access can rely on it. Columns are owned exclusively; `row` hands out a
/// freshly built vector, never a view into the storage.
///
/// There is no internal synchronization; mutating one instance from several
/// threads needs external locking.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    columns: Vec<Vector>,
}

impl Matrix {
    /// Builds a matrix from column vectors, all of one length.
    ///
    /// A matrix with zero columns is allowed, but most queries on it fail
    /// with `EmptyMatrix`.
    pub fn new(columns: Vec<Vector>) -> Result<Self, VecMatError> {
        if let Some(first) = columns.first() {
            let rows = first.len();
            for column in &columns[1..] {
                if column.len() != rows {
                    return Err(VecMatError::DimensionMismatch {
                        expected: rows,
                        found: column.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Borrowed column at `index`.
    pub fn column(&self, index: usize) -> Result<&Vector, VecMatError> {
        self.columns.get(index).ok_or(VecMatError::OutOfBounds {
            index,
            len: self.columns.len(),
        })
    }

    /// Row at `index`, synthesized as a fresh vector from the `index`-th
    /// component of every column. Mutating the result never touches the
    /// matrix.
    pub fn row(&self, index: usize) -> Result<Vector, VecMatError> {
        let rows = self.row_count()?;
        if index >= rows {
            return Err(VecMatError::OutOfBounds { index, len: rows });
        }

        let mut components = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            components.push(column.component(index)?);
        }
        Ok(Vector::new(components))
    }

    /// Number of rows, the length of the first column.
    pub fn row_count(&self) -> Result<usize, VecMatError> {
        match self.columns.first() {
            Some(column) => Ok(column.len()),
            None => Err(VecMatError::EmptyMatrix),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column count equals row count. The empty matrix is not square.
    pub fn is_square(&self) -> bool {
        match self.columns.first() {
            Some(column) => self.columns.len() == column.len(),
            None => false,
        }
    }

    /// Scales every column in place.
    pub fn scale_by(&mut self, factor: f64) {
        for column in &mut self.columns {
            column.scale_by(factor);
        }
    }

    /// Elementwise addition of an identically shaped matrix into `self`.
    pub fn add_in_place(&mut self, other: &Matrix) -> Result<(), VecMatError> {
        if self.column_count() != other.column_count() {
            return Err(VecMatError::DimensionMismatch {
                expected: self.column_count(),
                found: other.column_count(),
            });
        }
        if self.column_count() == 0 {
            return Ok(());
        }
        let rows = self.row_count()?;
        let other_rows = other.row_count()?;
        if rows != other_rows {
            return Err(VecMatError::DimensionMismatch {
                expected: rows,
                found: other_rows,
            });
        }

        for (column, other_column) in self.columns.iter_mut().zip(&other.columns) {
            column.add_in_place(other_column)?;
        }
        Ok(())
    }

    /// Determinant, defined for 2x2 matrices only.
    ///
    /// Fails with `EmptyMatrix` on zero columns, `NotSquare` on a non-square
    /// shape and `Unsupported` for any square size other than 2x2.
    pub fn determinant(&self) -> Result<f64, VecMatError> {
        let rows = self.row_count()?;
        let cols = self.column_count();
        if !self.is_square() {
            return Err(VecMatError::NotSquare { rows, cols });
        }
        if rows != 2 {
            debug!("determinant requested for unsupported size {}x{}", rows, cols);
            return Err(VecMatError::Unsupported { rows, cols });
        }

        let a = self.columns[0].component(0)? * self.columns[1].component(1)?;
        let b = self.columns[0].component(1)? * self.columns[1].component(0)?;
        Ok(a - b)
    }

    /// Standard matrix product of `a` (m x n) and `b` (n x p), yielding an
    /// m x p matrix whose entry at row `j`, column `i` is the dot product of
    /// `a`'s `j`-th row and `b`'s `i`-th column.
    ///
    /// Fails with `DimensionMismatch` unless `a.column_count()` equals
    /// `b.row_count()`.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, VecMatError> {
        let shared = a.column_count();
        let b_rows = b.row_count()?;
        if shared != b_rows {
            return Err(VecMatError::DimensionMismatch {
                expected: shared,
                found: b_rows,
            });
        }

        let rows = a.row_count()?;
        debug!(
            "multiplying {}x{} by {}x{}",
            rows,
            shared,
            b_rows,
            b.column_count()
        );

        let a_rows = (0..rows)
            .map(|j| a.row(j))
            .collect::<Result<Vec<_>, _>>()?;

        let mut columns = Vec::with_capacity(b.column_count());
        for i in 0..b.column_count() {
            let b_column = b.column(i)?;
            let mut components = Vec::with_capacity(rows);
            for a_row in &a_rows {
                components.push(a_row.dot(b_column)?);
            }
            columns.push(Vector::new(components));
        }
        Matrix::new(columns)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.columns.first().map_or(0, Vector::len);
        for row in 0..rows {
            write!(f, "[ ")?;
            for column in &self.columns {
                // In bounds per the equal-length invariant.
                write!(f, "{} ", column.as_slice()[row])?;
            }
            write!(f, "]")?;
            if row + 1 != rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
