use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{info, warn};
use serde::{Serialize, Deserialize};

use crate::data::xor::Example;
use crate::optim::sgd::Sgd;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::Trainer;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of parameter updates actually applied.
    pub iterations_run: usize,
    /// Mean squared error over the dataset after the last update.
    pub final_loss: f32,
}

/// One row of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub input: [f32; 2],
    pub target: f32,
    pub output: f32,
}

/// Full-batch gradient descent over `data` for `config.iterations`
/// iterations.
///
/// Each iteration zeroes the gradients, runs forward and backward on every
/// example in order, and then applies a single update with
/// `config.learning_rate`. Nothing is allocated inside the loop.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Panics
/// Panics if `data` is empty.
pub fn train_loop(trainer: &mut Trainer, data: &[Example], config: &TrainConfig) -> TrainReport {
    assert!(!data.is_empty(), "training set must not be empty");

    let optimizer = Sgd::new(config.learning_rate);
    let report_interval = config.report_interval.max(1);
    let start = Instant::now();
    let mut iterations_run = 0;

    for iteration in 0..config.iterations {
        if stop_requested(config) {
            warn!("stop requested; halting after {iterations_run} iterations");
            break;
        }

        let loss = run_one_batch(trainer, data, &optimizer);
        iterations_run = iteration + 1;

        if iteration % report_interval != 0 && iterations_run != config.iterations {
            continue;
        }

        let stats = IterationStats {
            iteration,
            total_iterations: config.iterations,
            loss,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        info!("iteration {}: loss = {:.6}", stats.iteration, stats.loss);

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                warn!("progress receiver dropped; halting after {iterations_run} iterations");
                break;
            }
        }
    }

    let final_loss = trainer.dataset_loss(data);
    info!("trained {iterations_run} iterations, final loss = {final_loss:.6}");

    TrainReport { iterations_run, final_loss }
}

/// Evaluates the trained network on every example.
pub fn evaluate(trainer: &mut Trainer, data: &[Example]) -> Vec<Prediction> {
    data.iter()
        .map(|ex| Prediction {
            input: ex.input,
            target: ex.target,
            output: trainer.predict(ex.input),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One reset/accumulate/update cycle. Returns the mean squared error seen
/// during the forward passes.
fn run_one_batch(trainer: &mut Trainer, data: &[Example], optimizer: &Sgd) -> f32 {
    trainer.reset_gradients();

    let mut total_loss = 0.0;
    for example in data {
        total_loss += trainer.accumulate(example);
    }

    trainer.apply_update(optimizer);
    total_loss / data.len() as f32
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}
