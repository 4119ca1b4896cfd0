pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid;
pub use network::network::{Activations, Network};
pub use network::parameters::{Gradients, Parameters};
pub use loss::mse::SquaredError;
pub use optim::sgd::Sgd;
pub use data::xor::{Example, XOR_TRUTH_TABLE};
pub use train::{evaluate, train_loop, IterationStats, Prediction, TrainConfig, TrainReport, Trainer};
pub use error::{Error, Result};
