use rand::Rng;

use crate::activation::sigmoid_prime;
use crate::errors::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Sums each column over all rows: (r×c) → (1×c).
pub fn sum_along_column(m: &Matrix) -> Matrix {
    let mut sums = vec![0.0; m.cols];
    for row in &m.data {
        for (sum, x) in sums.iter_mut().zip(row) {
            *sum += x;
        }
    }
    Matrix::from_data(vec![sums])
}

/// Reduces `m` along `axis`: 0 collapses rows into a (1×c) row, 1 collapses
/// columns into an (r×1) column.
pub fn sum_along_axis(m: &Matrix, axis: usize) -> Result<Matrix> {
    match axis {
        0 => Ok(sum_along_column(m)),
        1 => Ok(Matrix::from_data(
            m.data.iter().map(|row| vec![row.iter().sum()]).collect(),
        )),
        other => Err(NetworkError::InvalidReductionAxis(other)),
    }
}

/// Overwrites every entry of every matrix with an independent draw from U[0, 1).
pub fn rand_populate<R: Rng + ?Sized>(rng: &mut R, matrices: &mut [&mut Matrix]) {
    for matrix in matrices.iter_mut() {
        for row in matrix.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.gen::<f64>();
            }
        }
    }
}

/// Local gradient ("delta") of a layer: `error ⊙ σ'(output)`.
pub fn calc_derivatives(output_signals: &Matrix, error_signals: &Matrix) -> Matrix {
    let slopes = output_signals.map(sigmoid_prime);
    error_signals.hadamard(&slopes)
}
