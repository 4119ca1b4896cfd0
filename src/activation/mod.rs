//! The network's only nonlinearity.

/// Logistic sigmoid, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed through its own output: `σ'(z) = a(1 - a)`
/// where `a = σ(z)`.
pub fn sigmoid_derivative_from_activation(a: f32) -> f32 {
    a * (1.0 - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_symmetric_about_one_half() {
        for x in [0.1f32, 1.0, 3.5, 8.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-6);
        }
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(sigmoid_derivative_from_activation(0.5), 0.25);
        assert!(sigmoid_derivative_from_activation(0.9) < 0.25);
        assert_eq!(sigmoid_derivative_from_activation(1.0), 0.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let z = 0.7f32;
        let h = 1e-3f32;
        let numeric = (sigmoid(z + h) - sigmoid(z - h)) / (2.0 * h);
        let analytic = sigmoid_derivative_from_activation(sigmoid(z));
        assert!((numeric - analytic).abs() < 1e-3);
    }
}
