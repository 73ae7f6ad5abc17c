use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every cell: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = (predicted.rows * predicted.cols) as f64;
        if n == 0.0 {
            return 0.0;
        }
        (predicted - expected)
            .data
            .iter()
            .flatten()
            .map(|d| d * d)
            .sum::<f64>()
            / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_squared_differences() {
        let predicted = Matrix::from_data(vec![vec![0.5, 1.0], vec![0.0, 0.0]]);
        let expected = Matrix::from_data(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        assert_relative_eq!(MseLoss::loss(&predicted, &expected), 1.25 / 4.0);
    }

    #[test]
    fn empty_matrices_have_zero_loss() {
        assert_eq!(MseLoss::loss(&Matrix::zeros(0, 3), &Matrix::zeros(0, 3)), 0.0);
    }
}
