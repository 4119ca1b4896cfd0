use serde::{Serialize, Deserialize};

/// One training pair: two inputs and a scalar target in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: [f32; 2],
    pub target: f32,
}

impl Example {
    pub const fn new(x1: f32, x2: f32, target: f32) -> Example {
        Example { input: [x1, x2], target }
    }
}

/// The XOR truth table, in the order the training loop visits it.
pub const XOR_TRUTH_TABLE: [Example; 4] = [
    Example::new(0.0, 0.0, 0.0),
    Example::new(0.0, 1.0, 1.0),
    Example::new(1.0, 0.0, 1.0),
    Example::new(1.0, 1.0, 0.0),
];
