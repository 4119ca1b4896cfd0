use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Width of the input layer.
pub const INPUTS: usize = 2;
/// Width of the output layer.
pub const OUTPUTS: usize = 1;

/// Trainable weights and biases of the two layers.
///
/// Shapes, for `H` hidden units:
/// - `w1`: `INPUTS × H`, `b1`: `1 × H`
/// - `w2`: `H × OUTPUTS`, `b2`: `1 × OUTPUTS`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub(crate) w1: Matrix,
    pub(crate) b1: Matrix,
    pub(crate) w2: Matrix,
    pub(crate) b2: Matrix,
}

impl Parameters {
    pub fn zeros(hidden: usize) -> Parameters {
        Parameters {
            w1: Matrix::zeros(INPUTS, hidden),
            b1: Matrix::zeros(1, hidden),
            w2: Matrix::zeros(hidden, OUTPUTS),
            b2: Matrix::zeros(1, OUTPUTS),
        }
    }

    /// Every weight and bias drawn from `U[low, high)`, in the order
    /// `w1, b1, w2, b2`.
    pub fn random<R: Rng + ?Sized>(hidden: usize, rng: &mut R, low: f32, high: f32) -> Parameters {
        let mut params = Parameters::zeros(hidden);
        params.w1.fill_random_uniform(rng, low, high);
        params.b1.fill_random_uniform(rng, low, high);
        params.w2.fill_random_uniform(rng, low, high);
        params.b2.fill_random_uniform(rng, low, high);
        params
    }

    /// Assembles parameters from explicit matrices, checking that they
    /// describe a single `INPUTS → H → OUTPUTS` topology.
    pub fn from_matrices(w1: Matrix, b1: Matrix, w2: Matrix, b2: Matrix) -> Result<Parameters> {
        let hidden = b1.cols();
        let expected = [
            ("w1", &w1, INPUTS, hidden),
            ("b1", &b1, 1, hidden),
            ("w2", &w2, hidden, OUTPUTS),
            ("b2", &b2, 1, OUTPUTS),
        ];
        for (name, m, rows, cols) in expected {
            if m.rows() != rows || m.cols() != cols {
                return Err(Error::InvalidShape(format!(
                    "{name} is {}x{}, expected {rows}x{cols}",
                    m.rows(),
                    m.cols()
                )));
            }
        }
        Ok(Parameters { w1, b1, w2, b2 })
    }

    pub fn hidden(&self) -> usize {
        self.b1.cols()
    }

    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    pub fn b1(&self) -> &Matrix {
        &self.b1
    }

    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    pub fn b2(&self) -> &Matrix {
        &self.b2
    }

    /// Each parameter matrix paired with its gradient accumulator.
    ///
    /// # Panics
    /// Panics if `grads` was not built for this topology.
    pub fn pairs_mut<'a>(&'a mut self, grads: &'a Gradients) -> [(&'a mut Matrix, &'a Matrix); 4] {
        assert!(grads.matches(self), "gradient shapes do not match parameters");
        [
            (&mut self.w1, &grads.dw1),
            (&mut self.b1, &grads.db1),
            (&mut self.w2, &grads.dw2),
            (&mut self.b2, &grads.db2),
        ]
    }
}

/// Gradient accumulators, one per parameter matrix and of the same shape.
///
/// `Network::backward` adds into these; call `reset` before each batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub(crate) dw1: Matrix,
    pub(crate) db1: Matrix,
    pub(crate) dw2: Matrix,
    pub(crate) db2: Matrix,
}

impl Gradients {
    pub fn for_parameters(params: &Parameters) -> Gradients {
        Gradients {
            dw1: Matrix::zeros(params.w1.rows(), params.w1.cols()),
            db1: Matrix::zeros(params.b1.rows(), params.b1.cols()),
            dw2: Matrix::zeros(params.w2.rows(), params.w2.cols()),
            db2: Matrix::zeros(params.b2.rows(), params.b2.cols()),
        }
    }

    pub fn reset(&mut self) {
        self.dw1.zero();
        self.db1.zero();
        self.dw2.zero();
        self.db2.zero();
    }

    pub fn matches(&self, params: &Parameters) -> bool {
        self.dw1.same_shape(&params.w1)
            && self.db1.same_shape(&params.b1)
            && self.dw2.same_shape(&params.w2)
            && self.db2.same_shape(&params.b2)
    }

    pub fn dw1(&self) -> &Matrix {
        &self.dw1
    }

    pub fn db1(&self) -> &Matrix {
        &self.db1
    }

    pub fn dw2(&self) -> &Matrix {
        &self.dw2
    }

    pub fn db2(&self) -> &Matrix {
        &self.db2
    }
}
