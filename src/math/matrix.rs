use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid;

/// Dense row-major matrix of `f32` over a single owned buffer.
///
/// Shapes are fixed at allocation time. Every arithmetic method writes only
/// into `self` and panics on a shape mismatch: all shapes in this crate follow
/// from the network topology, so a mismatch is a construction bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Allocates a `rows × cols` matrix filled with `0.0`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero, got {rows}x{cols}");
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from literal rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty, the first row is empty, or the rows are ragged.
    pub fn from_rows(rows: &[&[f32]]) -> Matrix {
        let cols = rows.first().map_or(0, |row| row.len());
        let mut res = Matrix::zeros(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "row {i} has {} columns, expected {cols}", row.len());
            res.data[i * cols..(i + 1) * cols].copy_from_slice(row);
        }
        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    pub fn at(&self, i: usize, j: usize) -> f32 {
        self.data[self.offset(i, j)]
    }

    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        let idx = self.offset(i, j);
        &mut self.data[idx]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        *self.at_mut(i, j) = value;
    }

    /// Overwrites every element with a sample from `U[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high`.
    pub fn fill_random_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R, low: f32, high: f32) {
        let dist = Uniform::new(low, high);
        for x in self.data.iter_mut() {
            *x = dist.sample(rng);
        }
    }

    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }

    /// `self = a · b`, overwriting the previous contents.
    ///
    /// Plain triple loop over the row-major buffers.
    pub fn dot_into(&mut self, a: &Matrix, b: &Matrix) {
        assert_eq!(a.cols, b.rows, "dot: inner dimensions differ ({}x{} · {}x{})", a.rows, a.cols, b.rows, b.cols);
        assert!(
            self.rows == a.rows && self.cols == b.cols,
            "dot: destination is {}x{}, product is {}x{}",
            self.rows,
            self.cols,
            a.rows,
            b.cols
        );

        for i in 0..self.rows {
            for j in 0..self.cols {
                let mut sum = 0.0;
                for k in 0..a.cols {
                    sum += a.data[i * a.cols + k] * b.data[k * b.cols + j];
                }
                self.data[i * self.cols + j] = sum;
            }
        }
    }

    /// `self[i] += a[i]`.
    pub fn add_in_place(&mut self, a: &Matrix) {
        assert!(self.same_shape(a), "add: {}x{} vs {}x{}", self.rows, self.cols, a.rows, a.cols);
        for (x, y) in self.data.iter_mut().zip(a.data.iter()) {
            *x += y;
        }
    }

    /// `self[i] -= scale * a[i]`.
    pub fn sub_scaled_in_place(&mut self, a: &Matrix, scale: f32) {
        assert!(self.same_shape(a), "sub_scaled: {}x{} vs {}x{}", self.rows, self.cols, a.rows, a.cols);
        for (x, y) in self.data.iter_mut().zip(a.data.iter()) {
            *x -= scale * y;
        }
    }

    pub fn sigmoid_in_place(&mut self) {
        for x in self.data.iter_mut() {
            *x = sigmoid(*x);
        }
    }
}
