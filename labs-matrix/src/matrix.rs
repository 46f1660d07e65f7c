use std::fmt;

use crate::error::{Error, Result};

/// A non-empty rectangular matrix of `f64`, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from its rows. All rows must have the same, non-zero,
    /// width.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(Error::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, cells.len());
        Matrix { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.cells.chunks_exact(self.cols).nth(row)
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.cells
            .iter()
            .skip(col)
            .step_by(self.cols)
            .copied()
            .take(if col < self.cols { self.rows } else { 0 })
    }

    pub(crate) fn cells(&self) -> &[f64] {
        &self.cells
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks_exact(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}", row)?;
        }
        Ok(())
    }
}
