use std::fmt::Write;

use anyhow::Context;
use clap::Parser;
use labs_matrix::{sum_column_extremes, xor_bits, Extreme, Matrix, Parity};

use crate::common::SEPARATOR;

const A: [[f64; 4]; 3] = [
    [1.0, 2.5, -3.0, 4.0],
    [0.0, -1.5, 2.0, 8.0],
    [7.0, 3.5, 0.5, 1.0],
];

const B: [[f64; 4]; 3] = [
    [2.0, 1.5, 5.0, 0.0],
    [9.0, -1.5, -2.0, -3.0],
    [1.0, 6.5, 0.5, 2.0],
];

#[derive(Debug, Parser)]
pub(crate) struct Bitwise {}

impl Bitwise {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let a = Matrix::from_rows(&A).context("Invalid matrix A")?;
        let b = Matrix::from_rows(&B).context("Invalid matrix B")?;
        print!("{}", report(&a, &b)?);
        Ok(())
    }
}

fn report(a: &Matrix, b: &Matrix) -> anyhow::Result<String> {
    let outcome = xor_bits(a, b).context("Cannot combine matrices")?;
    for &(row, col) in &outcome.replaced {
        tracing::warn!(row, col, "XOR result is not a finite number, using 0.0");
    }
    tracing::debug!(rows = a.rows(), cols = a.cols(), "combined matrices");

    let c = &outcome.matrix;
    let max_even = sum_column_extremes(c, Extreme::Max, Parity::Even);
    let min_odd = sum_column_extremes(c, Extreme::Min, Parity::Odd);

    let mut out = String::new();
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Matrix C = A XOR B:")?;
    writeln!(out, "{}", c)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "sum of maxima in even columns = {:.6}", max_even)?;
    writeln!(out, "sum of minima in odd columns = {:.6}", min_odd)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let a = Matrix::from_rows(&[[1.0, 0.0], [3.0, -4.0]]).unwrap();
        let b = Matrix::from_rows(&[[0.0, 2.0], [0.0, 0.0]]).unwrap();
        let report = report(&a, &b).unwrap();
        let lines = report.lines().collect::<Vec<_>>();
        insta::assert_snapshot!(lines[1..].join("\n"), @r"
        Matrix C = A XOR B:
        [1.0, 2.0]
        [3.0, -4.0]
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        sum of maxima in even columns = 2.000000
        sum of minima in odd columns = 1.000000
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        ");
    }

    #[test]
    fn test_report_rejects_shape_mismatch() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0], [2.0]]).unwrap();
        assert!(report(&a, &b).is_err());
    }
}
