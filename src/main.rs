use std::env;
use std::process;
use std::sync::mpsc;
use std::thread;

use log::error;

use xor_nn::{evaluate, train_loop, TrainConfig, Trainer, XOR_TRUTH_TABLE};

/// Trains the XOR network and prints progress plus the final truth table.
///
/// Usage: `xor-nn [config.json]`. The optional JSON file overrides any subset
/// of the `TrainConfig` fields; logging is controlled through `RUST_LOG`.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => match TrainConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("could not load {path}: {e}");
                process::exit(1);
            }
        },
        None => TrainConfig::default(),
    };

    let mut trainer = match Trainer::new(&config) {
        Ok(trainer) => trainer,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    println!(
        "Training {}-neuron XOR network for {} iterations (learning rate {}, seed {})...",
        config.hidden, config.iterations, config.learning_rate, config.seed
    );

    // Training runs on its own thread so progress can be printed as it
    // arrives; the channel closes when the worker drops its config.
    let (tx, rx) = mpsc::channel();
    let run_config = TrainConfig { progress_tx: Some(tx), ..config };
    let worker = thread::spawn(move || {
        let report = train_loop(&mut trainer, &XOR_TRUTH_TABLE, &run_config);
        (trainer, report)
    });

    for stats in rx {
        println!("iteration {}: loss = {:.6}", stats.iteration, stats.loss);
    }

    let (mut trainer, report) = match worker.join() {
        Ok(done) => done,
        Err(_) => {
            error!("training thread panicked");
            process::exit(1);
        }
    };

    println!("\n--- Results after {} iterations (loss {:.6}) ---", report.iterations_run, report.final_loss);
    for p in evaluate(&mut trainer, &XOR_TRUTH_TABLE) {
        println!("{:.0} ^ {:.0} = {:.6}", p.input[0], p.input[1], p.output);
    }
}
