/// Logistic sigmoid: squashes any real input into (0, 1). σ(x) = 1 / (1 + e^−x)
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid, σ(x)·(1 − σ(x)).
///
/// Backpropagation feeds this the *post-activation* value of a layer, not its
/// pre-activation input. Training results depend on that exact substitution.
pub fn sigmoid_prime(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}
