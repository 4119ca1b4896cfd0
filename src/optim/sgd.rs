use crate::network::parameters::{Gradients, Parameters};

/// Plain gradient descent: `param -= learning_rate * grad`.
///
/// Gradients are applied as accumulated; no averaging over the batch.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f32,
}

impl Sgd {
    pub fn new(learning_rate: f32) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to every parameter matrix.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) {
        for (param, grad) in params.pairs_mut(grads) {
            param.sub_scaled_in_place(grad, self.learning_rate);
        }
    }
}
