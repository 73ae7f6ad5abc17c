use crate::errors::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Index of the maximum element in a slice; the first one wins a tie and NaN is ignored.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .filter(|(_, x)| !x.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, &x)| match best {
            Some((_, b)) if x <= b => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Fraction of rows whose arg-max prediction matches the arg-max label.
pub fn subset_accuracy(predictions: &Matrix, labels: &Matrix) -> Result<f64> {
    if predictions.rows != labels.rows {
        return Err(NetworkError::ShapeMismatch {
            context: "accuracy rows",
            expected: labels.rows,
            actual: predictions.rows,
        });
    }
    if predictions.cols != labels.cols {
        return Err(NetworkError::ShapeMismatch {
            context: "accuracy columns",
            expected: labels.cols,
            actual: predictions.cols,
        });
    }
    if predictions.rows == 0 {
        return Ok(0.0);
    }

    let correct = predictions
        .data
        .iter()
        .zip(&labels.data)
        .filter(|(predicted, label)| argmax(predicted) == argmax(label))
        .count();

    Ok(correct as f64 / predictions.rows as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn argmax_picks_first_maximum() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), 0);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(&[f64::NAN, 0.2, 0.9]), 2);
    }

    #[test]
    fn counts_matching_rows() {
        let predictions = Matrix::from_data(vec![
            vec![0.9, 0.2, 0.1],
            vec![0.3, 0.4, 0.8],
            vec![0.6, 0.5, 0.1],
            vec![0.1, 0.7, 0.6],
        ]);
        let labels = Matrix::from_data(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ]);
        assert_relative_eq!(subset_accuracy(&predictions, &labels).unwrap(), 0.75);
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let err = subset_accuracy(&Matrix::zeros(2, 3), &Matrix::zeros(3, 3)).unwrap_err();
        assert!(matches!(err, NetworkError::ShapeMismatch { context: "accuracy rows", .. }));
    }
}
