use serde::{Serialize, Deserialize};

/// Progress snapshot emitted by `train_loop` at each reporting point.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one value is
/// sent at iteration 0, every `report_interval` iterations after that, and
/// after the final iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 0-based iteration index.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Mean squared error over the batch, measured during this iteration's
    /// forward passes (before its update).
    pub loss: f32,
    /// Wall-clock time since the loop started, in milliseconds.
    pub elapsed_ms: u64,
}
