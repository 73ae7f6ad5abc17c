use std::ops::{Add, Mul, Range, Sub};

use crate::errors::{NetworkError, Result};

/// Dense row-major matrix of `f64`; the only numeric carrier in the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        }
    }

    /// Builds a matrix from nested rows. An empty outer vector yields a 0×0 matrix.
    ///
    /// # Panics
    /// Panics if the rows are ragged.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, Vec::len);
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// Builds a `rows`×`cols` matrix from row-major flat values.
    pub fn from_flat(rows: usize, cols: usize, values: Vec<f64>) -> Result<Matrix> {
        if values.len() != rows * cols {
            return Err(NetworkError::ShapeMismatch {
                context: "flat matrix data",
                expected: rows * cols,
                actual: values.len(),
            });
        }
        if cols == 0 {
            return Ok(Matrix::zeros(rows, 0));
        }
        let data = values.chunks(cols).map(<[f64]>::to_vec).collect();
        Ok(Matrix { rows, cols, data })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn col(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    /// Copies the rows in `range` into a new matrix with the same column count.
    pub fn slice_rows(&self, range: Range<usize>) -> Matrix {
        Matrix {
            rows: range.len(),
            cols: self.cols,
            data: self.data[range].to_vec(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Element-wise function application.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a * b)
    }

    /// Adds the 1×`cols` row vector `row` to every row of `self`.
    pub fn add_row_broadcast(&self, row: &Matrix) -> Matrix {
        assert!(
            row.rows == 1 && row.cols == self.cols,
            "Broadcast row must be 1x{}, got {}x{}",
            self.cols,
            row.rows,
            row.cols
        );
        let bias = &row.data[0];
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|r| r.iter().zip(bias).map(|(x, b)| x + b).collect())
                .collect(),
        }
    }

    /// In-place element-wise addition.
    pub fn add_assign(&mut self, other: &Matrix) {
        self.assert_same_shape(other);
        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (x, y) in row.iter_mut().zip(other_row) {
                *x += y;
            }
        }
    }

    fn zip_with<F>(&self, other: &Matrix, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        self.assert_same_shape(other);
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
                .collect(),
        }
    }

    fn assert_same_shape(&self, other: &Matrix) {
        if self.rows != other.rows || self.cols != other.cols {
            panic!(
                "Matrices are of incorrect sizes: {}x{} vs {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix {
        if self.cols != rhs.rows {
            panic!(
                "Matrices are of incorrect sizes: {}x{} * {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                for j in 0..res.cols {
                    res.data[i][j] += a * rhs.data[k][j];
                }
            }
        }

        res
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Matrix {
        &self + &rhs
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Matrix {
        &self - &rhs
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_is_row_major() {
        let m = Matrix::from_flat(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.col(2), vec![3.0, 6.0]);
    }

    #[test]
    fn from_flat_rejects_wrong_length() {
        let err = Matrix::from_flat(2, 2, vec![1.0; 3]).unwrap_err();
        assert!(matches!(err, NetworkError::ShapeMismatch { expected: 4, actual: 3, .. }));
    }

    #[test]
    fn product_and_transpose() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let b = Matrix::from_data(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]);

        let c = &a * &b;
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.row(2), &[5.0, 6.0, 16.0]);

        let t = a.transpose();
        assert_eq!(t.shape(), (2, 3));
        assert_eq!(t.row(1), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn broadcast_adds_row_to_every_row() {
        let m = Matrix::filled(3, 2, 1.0);
        let bias = Matrix::from_data(vec![vec![0.5, -1.0]]);
        let out = m.add_row_broadcast(&bias);
        assert!(out.data.iter().all(|row| row == &vec![1.5, 0.0]));
    }

    #[test]
    fn slice_rows_copies_range() {
        let m = Matrix::from_data(vec![vec![1.0], vec![2.0], vec![3.0]]);
        let s = m.slice_rows(1..3);
        assert_eq!(s, Matrix::from_data(vec![vec![2.0], vec![3.0]]));
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn mismatched_product_panics() {
        let _ = &Matrix::zeros(2, 3) * &Matrix::zeros(2, 3);
    }
}
