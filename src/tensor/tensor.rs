use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{Error, Result};

/// Dense row-major `f32` matrix. Column vectors are `(n, 1)` tensors.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    pub(crate) data: Vec<f32>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Tensor {
    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Result<Tensor> {
        if data.len() != rows * cols {
            return Err(Error::Configuration(format!(
                "tensor data has {} values, a {}x{} tensor needs {}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Tensor { data, rows, cols })
    }

    /// Builds an `(n, 1)` column vector.
    pub fn column(data: Vec<f32>) -> Tensor {
        let rows = data.len();
        Tensor { data, rows, cols: 1 }
    }

    /// Builds a matrix from equally long rows.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Tensor> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::ShapeMismatch {
                    what: "matrix row",
                    expected: (1, cols),
                    got: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Tensor { data, rows: rows.len(), cols })
    }

    pub fn zeros(rows: usize, cols: usize) -> Tensor {
        Tensor { data: vec![0.0; rows * cols], rows, cols }
    }

    /// Every entry is an independent draw from N(0, 1).
    pub fn random_gaussian<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Tensor {
        let data = (0..rows * cols)
            .map(|_| -> f32 { StandardNormal.sample(rng) })
            .collect();
        Tensor { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols, "Index ({}, {}) out of bounds for {}x{} tensor", row, col, self.rows, self.cols);
        self.data[row * self.cols + col]
    }

    /// Applies `f` to every entry, returning a tensor of the same shape.
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Tensor {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Tensor { data, rows: self.rows, cols: self.cols }
    }

    /// Matrix product `self · matrix`.
    pub fn mul(&self, matrix: &Tensor) -> Tensor {
        let (r1, c1) = self.shape();
        let (r2, c2) = matrix.shape();

        assert_eq!(c1, r2, "Matrix dimensions don't match: {}x{} * {}x{}", r1, c1, r2, c2);

        let mut result = vec![0.0; r1 * c2];

        for i in 0..r1 {
            let row = &self.data[i * c1..(i + 1) * c1];
            for j in 0..c2 {
                let mut sum = 0.0;
                for (k, &a) in row.iter().enumerate() {
                    sum += a * matrix.data[k * c2 + j];
                }
                result[i * c2 + j] = sum;
            }
        }
        Tensor { data: result, rows: r1, cols: c2 }
    }

    /// Outer product `self · otherᵀ` of two column vectors.
    pub fn outer(&self, other: &Tensor) -> Tensor {
        assert!(self.is_column() && other.is_column(), "Outer product expects column vectors, got {}x{} and {}x{}", self.rows, self.cols, other.rows, other.cols);

        let mut data = Vec::with_capacity(self.rows * other.rows);
        for &a in &self.data {
            data.extend(other.data.iter().map(|&b| a * b));
        }
        Tensor { data, rows: self.rows, cols: other.rows }
    }

    pub fn transpose(&self) -> Tensor {
        let (rows, cols) = self.shape();
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                data[j * rows + i] = self.data[i * cols + j];
            }
        }
        Tensor { data, rows: cols, cols: rows }
    }

    // Element wise multiplication
    pub fn hadamard(&self, other: &Tensor) -> Tensor {
        assert_eq!(self.shape(), other.shape(), "Tensor hadamard: shape mismatch {:?} vs {:?}", self.shape(), other.shape());

        let data = self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).collect();
        Tensor { data, rows: self.rows, cols: self.cols }
    }

    pub fn scale(&self, scalar: f32) -> Tensor {
        self.map(|x| x * scalar)
    }

    pub fn square(&self) -> Tensor {
        self.map(|x| x * x)
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
