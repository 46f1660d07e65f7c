use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// The result of [`xor_bits`].
#[derive(Debug, Clone, PartialEq)]
pub struct XorOutcome {
    pub matrix: Matrix,
    /// `(row, column)` of every cell that came out NaN or infinite and was
    /// replaced by `0.0`.
    pub replaced: Vec<(usize, usize)>,
}

/// Combine two matrices of the same shape cell by cell: each result cell is
/// the float whose bit pattern is the XOR of the operands' bit patterns.
///
/// XOR can produce NaN or infinite bit patterns; those cells become `0.0`.
pub fn xor_bits(a: &Matrix, b: &Matrix) -> Result<XorOutcome> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(Error::ShapeMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }
    let cols = a.cols();
    let mut replaced = Vec::new();
    let cells = a
        .cells()
        .iter()
        .zip(b.cells())
        .enumerate()
        .map(|(i, (x, y))| {
            let value = f64::from_bits(x.to_bits() ^ y.to_bits());
            if value.is_finite() {
                value
            } else {
                replaced.push((i / cols, i % cols));
                0.0
            }
        })
        .collect();
    Ok(XorOutcome {
        matrix: Matrix::from_cells(a.rows(), cols, cells),
        replaced,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

/// Column parity, with columns numbered from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    fn matches(self, index: usize) -> bool {
        let even = (index + 1) % 2 == 0;
        match self {
            Parity::Even => even,
            Parity::Odd => !even,
        }
    }
}

/// Sum the maximum (or minimum) of every column with the given parity.
pub fn sum_column_extremes(m: &Matrix, extreme: Extreme, parity: Parity) -> f64 {
    (0..m.cols())
        .filter(|&col| parity.matches(col))
        .map(|col| {
            let column = m.column(col);
            match extreme {
                Extreme::Max => column.fold(f64::NEG_INFINITY, f64::max),
                Extreme::Min => column.fold(f64::INFINITY, f64::min),
            }
        })
        .sum()
}
