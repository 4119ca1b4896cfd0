/// Per-example squared error, `L = (y - t)²`.
pub struct SquaredError;

impl SquaredError {
    pub fn loss(predicted: f32, expected: f32) -> f32 {
        (predicted - expected).powi(2)
    }

    /// ∂L/∂y = 2(y - t)
    pub fn derivative(predicted: f32, expected: f32) -> f32 {
        2.0 * (predicted - expected)
    }
}
