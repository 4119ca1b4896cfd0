pub mod network;
pub mod parameters;

pub use network::{Activations, Network};
pub use parameters::{Gradients, Parameters, INPUTS, OUTPUTS};
