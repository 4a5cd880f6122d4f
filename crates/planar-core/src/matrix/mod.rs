//! Dense matrices
//!
//! - `Matrix<T>`: row-major grid of values with a fixed shape
//! - `PathMatrix`: square hub-to-hub cost table built on `Matrix<i32>`

pub mod path;

pub use path::{PathMatrix, UNREACHABLE_COST};

use std::fmt;

use crate::error::{PlanarError, Result};

/// A fixed-shape, row-major matrix.
///
/// Equality and hashing are element-wise, so two matrices compare equal
/// exactly when they have the same shape and the same entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a `rows` x `cols` matrix with every entry set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Matrix {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Build a matrix from a list of rows.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(PlanarError::malformed_matrix(
                "all rows must have the same length",
            ));
        }

        Ok(Matrix {
            rows: num_rows,
            cols: num_cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(move |i| &mut self.cells[i])
    }

    /// Overwrite the entry at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (rows, cols) = (self.rows, self.cols);
        let cell = self.get_mut(row, col).ok_or_else(|| {
            PlanarError::invalid_value(
                "matrix position",
                format!("({}, {}) outside {}x{}", row, col, rows, cols),
            )
        })?;
        *cell = value;
        Ok(())
    }

    /// Entries of row `row`, left to right
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_shape() {
        let m = Matrix::filled(2, 3, 7u8);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2), Some(&7));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, PlanarError::MalformedMatrix { .. }));
        assert!(err.to_string().contains("all rows must have the same length"));
    }

    #[test]
    fn test_from_rows_empty() {
        let m: Matrix<i32> = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn test_set_and_get() {
        let mut m = Matrix::filled(2, 2, 0);
        m.set(0, 1, 5).unwrap();
        assert_eq!(m.get(0, 1), Some(&5));
        assert_eq!(m.row(0), Some(&[0, 5][..]));
        assert_eq!(m.row(2), None);

        let err = m.set(2, 0, 1).unwrap_err();
        assert!(matches!(err, PlanarError::InvalidValue { .. }));
    }

    #[test]
    fn test_elementwise_equality() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut b = Matrix::filled(2, 2, 0);
        for (r, row) in [[1, 2], [3, 4]].iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                b.set(r, c, *v).unwrap();
            }
        }
        assert_eq!(a, b);

        b.set(1, 1, 9).unwrap();
        assert_ne!(a, b);

        // Same entries, different shape
        let flat = Matrix::from_rows(vec![vec![1, 2, 3, 4]]).unwrap();
        assert_ne!(a, flat);
    }

    #[test]
    fn test_display_rows() {
        let m = Matrix::from_rows(vec![vec![0, 12], vec![12, 0]]).unwrap();
        assert_eq!(m.to_string(), "0 12\n12 0\n");
    }
}
