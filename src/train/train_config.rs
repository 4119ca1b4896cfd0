use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::train::iteration_stats::IterationStats;

/// Hyperparameters and runtime hooks for a `train_loop` run.
///
/// # Fields
/// - `hidden`         : hidden layer width
/// - `iterations`     : number of full-batch updates
/// - `learning_rate`  : gradient descent step size
/// - `seed`           : seed for parameter initialization
/// - `report_interval`: iterations between progress reports
/// - `init_low`, `init_high`: initial weights are drawn from `U[init_low, init_high)`
/// - `progress_tx`    : optional channel sender; one `IterationStats` is sent
///                       per report. If the receiver is dropped the loop stops.
/// - `stop_flag`      : optional atomic flag; when set from another thread
///                       the loop stops before the next iteration.
///
/// Every serialized field has a default, so a JSON file only needs the
/// fields it overrides. The runtime hooks are never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    pub hidden: usize,
    pub iterations: usize,
    pub learning_rate: f32,
    pub seed: u64,
    pub report_interval: usize,
    pub init_low: f32,
    pub init_high: f32,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
    #[serde(skip)]
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            hidden: 64,
            iterations: 100_000,
            learning_rate: 1.0,
            seed: 69,
            report_interval: 2000,
            init_low: -1.0,
            init_high: 1.0,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hidden == 0 {
            return Err(Error::InvalidConfig("hidden must be > 0".to_owned()));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be > 0".to_owned()));
        }
        if self.report_interval == 0 {
            return Err(Error::InvalidConfig("report_interval must be > 0".to_owned()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig("learning_rate must be finite and > 0".to_owned()));
        }
        if !(self.init_low.is_finite() && self.init_high.is_finite() && self.init_low < self.init_high) {
            return Err(Error::InvalidConfig(format!(
                "init range [{}, {}) is empty or not finite",
                self.init_low, self.init_high
            )));
        }
        Ok(())
    }

    /// Reads a config from a JSON file and validates it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
        let file = File::open(path)?;
        let config: TrainConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}
