use log::debug;
use rand::Rng;

use crate::activation::sigmoid_derivative_from_activation;
use crate::loss::mse::SquaredError;
use crate::math::matrix::Matrix;
use crate::network::parameters::{Gradients, Parameters, INPUTS, OUTPUTS};

/// Layer outputs of one forward pass.
///
/// Only `Network::forward` writes into this; `Network::backward` reads it.
/// Allocate once with `Network::activations` and reuse across calls.
#[derive(Debug, Clone)]
pub struct Activations {
    input: Matrix,
    hidden: Matrix,
    output: Matrix,
}

impl Activations {
    fn new(hidden: usize) -> Activations {
        Activations {
            input: Matrix::zeros(1, INPUTS),
            hidden: Matrix::zeros(1, hidden),
            output: Matrix::zeros(1, OUTPUTS),
        }
    }

    pub fn input(&self) -> &Matrix {
        &self.input
    }

    pub fn hidden(&self) -> &Matrix {
        &self.hidden
    }

    /// The network's prediction from the last forward pass.
    pub fn output(&self) -> f32 {
        self.output.at(0, 0)
    }
}

/// `INPUTS → H → OUTPUTS` network with sigmoid on both layers.
#[derive(Debug, Clone)]
pub struct Network {
    params: Parameters,
}

impl Network {
    pub fn new(params: Parameters) -> Network {
        debug!("network: {INPUTS} -> {} -> {OUTPUTS}", params.hidden());
        Network { params }
    }

    pub fn random<R: Rng + ?Sized>(hidden: usize, rng: &mut R, low: f32, high: f32) -> Network {
        Network::new(Parameters::random(hidden, rng, low, high))
    }

    pub fn hidden(&self) -> usize {
        self.params.hidden()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    pub fn activations(&self) -> Activations {
        Activations::new(self.hidden())
    }

    pub fn gradients(&self) -> Gradients {
        Gradients::for_parameters(&self.params)
    }

    /// Evaluates the network on `input`, overwriting `acts`, and returns the
    /// prediction.
    pub fn forward(&self, input: [f32; INPUTS], acts: &mut Activations) -> f32 {
        let p = &self.params;

        for (j, &x) in input.iter().enumerate() {
            acts.input.set(0, j, x);
        }

        acts.hidden.dot_into(&acts.input, &p.w1);
        acts.hidden.add_in_place(&p.b1);
        acts.hidden.sigmoid_in_place();

        acts.output.dot_into(&acts.hidden, &p.w2);
        acts.output.add_in_place(&p.b2);
        acts.output.sigmoid_in_place();

        acts.output()
    }

    /// Adds the squared-error gradient for `target` into `grads`.
    ///
    /// `acts` must come from `forward` on the example `target` belongs to.
    /// Nothing is overwritten: calling this for several examples between two
    /// `Gradients::reset` calls sums their gradients.
    pub fn backward(&self, acts: &Activations, target: f32, grads: &mut Gradients) {
        assert!(grads.matches(&self.params), "gradient shapes do not match parameters");
        let p = &self.params;
        let hidden = self.hidden();

        let y = acts.output();
        let delta_out = SquaredError::derivative(y, target) * sigmoid_derivative_from_activation(y);

        for i in 0..hidden {
            *grads.dw2.at_mut(i, 0) += acts.hidden.at(0, i) * delta_out;
        }
        *grads.db2.at_mut(0, 0) += delta_out;

        for i in 0..hidden {
            let a = acts.hidden.at(0, i);
            let hidden_delta = (delta_out * p.w2.at(i, 0)) * sigmoid_derivative_from_activation(a);

            for j in 0..INPUTS {
                *grads.dw1.at_mut(j, i) += acts.input.at(0, j) * hidden_delta;
            }
            *grads.db1.at_mut(0, i) += hidden_delta;
        }
    }
}
