use rand::Rng;

use crate::activation::sigmoid;
use crate::math::{matrix::Matrix, utils::{rand_populate, sum_along_column}};

/// The (fan_in, fan_out) pair of one layer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerShape {
    pub fan_in: usize,
    pub fan_out: usize,
}

impl LayerShape {
    pub fn new(fan_in: usize, fan_out: usize) -> LayerShape {
        LayerShape { fan_in, fan_out }
    }

    pub fn edges(&self) -> usize {
        self.fan_in * self.fan_out
    }
}

/// One sigmoid layer transition: `weights` is fan_in×fan_out, `biases` is 1×fan_out.
#[derive(Debug, Clone)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Layer {
    /// A layer with all parameters set to zero.
    pub fn zeros(shape: LayerShape) -> Layer {
        Layer {
            weights: Matrix::zeros(shape.fan_in, shape.fan_out),
            biases: Matrix::zeros(1, shape.fan_out),
        }
    }

    /// A layer with weights and biases drawn uniformly from [0, 1).
    pub fn random<R: Rng + ?Sized>(shape: LayerShape, rng: &mut R) -> Layer {
        let mut layer = Layer::zeros(shape);
        rand_populate(rng, &mut [&mut layer.weights, &mut layer.biases]);
        layer
    }

    pub fn shape(&self) -> LayerShape {
        LayerShape::new(self.weights.rows, self.weights.cols)
    }

    /// Forward step for a whole batch: σ(input · W + b), bias broadcast over rows.
    pub fn feed_from(&self, input: &Matrix) -> Matrix {
        let z = (input * &self.weights).add_row_broadcast(&self.biases);
        z.map(sigmoid)
    }

    /// `W += lr · (activationsᵀ · derivatives)`
    pub fn adjust_weights(&mut self, activations: &Matrix, derivatives: &Matrix, lr: f64) {
        let adjustment = (&activations.transpose() * derivatives).scale(lr);
        self.weights.add_assign(&adjustment);
    }

    /// `b += lr · sum_along_column(derivatives)`
    pub fn adjust_bias(&mut self, derivatives: &Matrix, lr: f64) {
        let adjustment = sum_along_column(derivatives).scale(lr);
        self.biases.add_assign(&adjustment);
    }
}
