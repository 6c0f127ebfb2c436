use std::fmt;

use ndarray::Array2;

use crate::error::{Error, Result};

/// Fixed-size two-dimensional grid addressed by `(row, col)`.
///
/// The shape is set at construction and never changes; `get` and `set` are
/// O(1). Out-of-bounds coordinates fail with [`Error::IndexOutOfRange`],
/// reporting the offending coordinate against its bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Array2<T>,
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a `rows x cols` matrix of `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows x cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Matrix {
            data: Array2::from_elem((rows, cols), value),
        }
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.data
            .get((row, col))
            .ok_or_else(|| out_of_range((row, col), self.data.dim()))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let shape = self.data.dim();
        self.data
            .get_mut((row, col))
            .ok_or_else(|| out_of_range((row, col), shape))
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Iterates over the cells of `row`, left to right.
    pub fn row(&self, row: usize) -> Result<impl Iterator<Item = &T> + '_> {
        if row >= self.rows() {
            return Err(Error::out_of_range(row, self.rows()));
        }
        Ok(self.data.row(row).into_iter())
    }
}

/// Reports the first coordinate outside its bound.
fn out_of_range((row, col): (usize, usize), (rows, cols): (usize, usize)) -> Error {
    if row >= rows {
        Error::out_of_range(row, rows)
    } else {
        Error::out_of_range(col, cols)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One line per row, cells separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.rows().into_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
