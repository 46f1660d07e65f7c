//! Bitwise combination of floating point matrices and column extremum sums.
mod error;
mod matrix;
mod ops;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use ops::{sum_column_extremes, xor_bits, Extreme, Parity, XorOutcome};
