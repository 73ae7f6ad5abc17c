use crate::{layers::dense::Layer, math::matrix::Matrix};

/// Plain full-batch gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Applies one update to `layer` given the activations that fed it and its delta.
    pub fn step(&self, layer: &mut Layer, activations: &Matrix, derivatives: &Matrix) {
        layer.adjust_weights(activations, derivatives, self.learning_rate);
        layer.adjust_bias(derivatives, self.learning_rate);
    }
}
