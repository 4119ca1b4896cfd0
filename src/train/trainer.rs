use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::xor::Example;
use crate::error::Result;
use crate::loss::mse::SquaredError;
use crate::network::network::{Activations, Network};
use crate::network::parameters::{Gradients, INPUTS};
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;

/// Owns a network together with its gradient accumulators and activation
/// cache. All buffers are allocated here once and reused by every call.
#[derive(Debug, Clone)]
pub struct Trainer {
    network: Network,
    grads: Gradients,
    cache: Activations,
}

impl Trainer {
    /// Validates `config` and builds a randomly initialized network from
    /// `config.seed`.
    pub fn new(config: &TrainConfig) -> Result<Trainer> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let network = Network::random(config.hidden, &mut rng, config.init_low, config.init_high);
        debug!(
            "initialized {} hidden units from seed {} in [{}, {})",
            config.hidden, config.seed, config.init_low, config.init_high
        );
        Ok(Trainer::from_network(network))
    }

    pub fn from_network(network: Network) -> Trainer {
        let grads = network.gradients();
        let cache = network.activations();
        Trainer { network, grads, cache }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn gradients(&self) -> &Gradients {
        &self.grads
    }

    /// Zeroes the accumulators. Call once at the start of every batch.
    pub fn reset_gradients(&mut self) {
        self.grads.reset();
    }

    /// Runs forward then backward on `example`, adding its gradient to the
    /// accumulators. Returns the example's squared error under the current
    /// parameters.
    pub fn accumulate(&mut self, example: &Example) -> f32 {
        let y = self.network.forward(example.input, &mut self.cache);
        self.network.backward(&self.cache, example.target, &mut self.grads);
        SquaredError::loss(y, example.target)
    }

    pub fn apply_update(&mut self, optimizer: &Sgd) {
        optimizer.step(self.network.parameters_mut(), &self.grads);
    }

    pub fn predict(&mut self, input: [f32; INPUTS]) -> f32 {
        self.network.forward(input, &mut self.cache)
    }

    /// Mean squared error over `data`; gradients are left untouched.
    pub fn dataset_loss(&mut self, data: &[Example]) -> f32 {
        if data.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        for ex in data {
            let y = self.network.forward(ex.input, &mut self.cache);
            total += SquaredError::loss(y, ex.target);
        }
        total / data.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::xor::XOR_TRUTH_TABLE;
    use crate::error::Error;

    fn small_config() -> TrainConfig {
        TrainConfig { hidden: 4, iterations: 10, ..TrainConfig::default() }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = TrainConfig { hidden: 0, ..TrainConfig::default() };
        assert!(matches!(Trainer::new(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn dataset_loss_does_not_touch_gradients() {
        let mut trainer = Trainer::new(&small_config()).unwrap();
        let before = trainer.gradients().clone();
        trainer.dataset_loss(&XOR_TRUTH_TABLE);
        assert_eq!(trainer.gradients(), &before);
    }

    #[test]
    fn missing_reset_leaks_previous_batch() {
        let mut trainer = Trainer::new(&small_config()).unwrap();
        let example = XOR_TRUTH_TABLE[1];

        trainer.reset_gradients();
        trainer.accumulate(&example);
        let once = trainer.gradients().clone();

        trainer.accumulate(&example);
        let twice = trainer.gradients().db2().at(0, 0);
        assert!((twice - 2.0 * once.db2().at(0, 0)).abs() < 1e-6);

        trainer.reset_gradients();
        trainer.accumulate(&example);
        assert_eq!(trainer.gradients(), &once);
    }

    #[test]
    fn accumulate_returns_squared_error() {
        let mut trainer = Trainer::new(&small_config()).unwrap();
        let example = XOR_TRUTH_TABLE[2];
        let y = trainer.predict(example.input);
        trainer.reset_gradients();
        let loss = trainer.accumulate(&example);
        assert_eq!(loss, (y - example.target).powi(2));
    }

    #[test]
    fn one_update_lowers_batch_loss() {
        let mut trainer = Trainer::new(&small_config()).unwrap();
        let before = trainer.dataset_loss(&XOR_TRUTH_TABLE);

        trainer.reset_gradients();
        for example in &XOR_TRUTH_TABLE {
            trainer.accumulate(example);
        }
        trainer.apply_update(&Sgd::new(0.05));

        assert!(trainer.dataset_loss(&XOR_TRUTH_TABLE) < before);
    }
}
