use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, log_enabled, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::{NetworkError, Result};
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;
use crate::math::{matrix::Matrix, utils::calc_derivatives};
use crate::network::config::NetworkConfig;
use crate::optim::gradient_descent::GradientDescent;

/// A sigmoid multilayer perceptron trained by full-batch gradient descent.
///
/// Parameters do not exist until `train` runs; `predict` fails with
/// `NetworkError::UninitializedModel` before that.
pub struct Network {
    config: NetworkConfig,
    layers: Option<Vec<Layer>>,
    optimizer: GradientDescent,
    rng: StdRng,
    seed: u64,
}

impl Network {
    /// Validates `config` and prepares an untrained network.
    ///
    /// The initialisation generator is seeded from `config.seed`, or from the
    /// wall clock when no seed is configured.
    pub fn new(config: NetworkConfig) -> Result<Network> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(time_seed);
        info!(
            "Initializing neural net with {} edges and {} epochs (seed {})",
            config.count_edges(),
            config.epochs,
            seed
        );

        Ok(Network {
            optimizer: GradientDescent::new(config.learning_rate),
            rng: StdRng::seed_from_u64(seed),
            layers: None,
            config,
            seed,
        })
    }

    /// Same as `new`, overriding whatever seed the config carries.
    pub fn with_seed(config: NetworkConfig, seed: u64) -> Result<Network> {
        Network::new(config.with_seed(seed))
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_trained(&self) -> bool {
        self.layers.is_some()
    }

    /// Trained layers in input→output order, if any.
    pub fn layers(&self) -> Option<&[Layer]> {
        self.layers.as_deref()
    }

    /// Re-initialises all parameters uniformly in [0, 1) and runs
    /// `config.epochs` full-batch epochs over `inputs`/`labels`.
    pub fn train(&mut self, inputs: &Matrix, labels: &Matrix) -> Result<()> {
        self.check_inputs(inputs, "training inputs")?;
        if labels.cols != self.config.output_neurons {
            return Err(NetworkError::ShapeMismatch {
                context: "label columns",
                expected: self.config.output_neurons,
                actual: labels.cols,
            });
        }
        if labels.rows != inputs.rows {
            return Err(NetworkError::ShapeMismatch {
                context: "label rows",
                expected: inputs.rows,
                actual: labels.rows,
            });
        }
        if inputs.rows == 0 {
            return Err(NetworkError::Data("training set has no rows".into()));
        }

        let layers: Vec<Layer> = self
            .config
            .layer_shapes()
            .into_iter()
            .map(|shape| Layer::random(shape, &mut self.rng))
            .collect();
        self.layers = Some(layers);

        let epochs = self.config.epochs;
        let report_every = (epochs / 10).max(1);

        for epoch in 1..=epochs {
            let activations = self.feed_forward(inputs);

            if log_enabled!(Level::Debug) && (epoch % report_every == 0 || epoch == epochs) {
                if let Some(prediction) = activations.last() {
                    debug!(
                        "epoch {epoch}/{epochs}: mse = {:.6}",
                        MseLoss::loss(prediction, labels)
                    );
                }
            }

            self.backpropagate(inputs, labels, &activations);
        }

        info!(
            "Trained {} layers on {} examples for {} epochs",
            self.config.layer_shapes().len(),
            inputs.rows,
            epochs
        );

        Ok(())
    }

    /// One forward pass over `inputs`. Returns a (rows × output_neurons)
    /// matrix of independent per-class sigmoid scores.
    pub fn predict(&self, inputs: &Matrix) -> Result<Matrix> {
        let layers = self.layers.as_deref().ok_or(NetworkError::UninitializedModel)?;
        self.check_inputs(inputs, "prediction inputs")?;

        Ok(layers
            .iter()
            .fold(inputs.clone(), |current, layer| layer.feed_from(&current)))
    }

    /// Post-sigmoid activations of every layer, hidden layers first and the
    /// network output last. Empty while the network is untrained.
    fn feed_forward(&self, inputs: &Matrix) -> Vec<Matrix> {
        let layers = self.layers.as_deref().unwrap_or_default();
        let mut activations: Vec<Matrix> = Vec::with_capacity(layers.len());
        for layer in layers {
            let next = layer.feed_from(activations.last().unwrap_or(inputs));
            activations.push(next);
        }
        activations
    }

    /// Walks the layers from output to input, updating each in place.
    ///
    /// The error for layer `i - 1` is computed from layer `i`'s weights before
    /// those weights are updated.
    fn backpropagate(&mut self, inputs: &Matrix, labels: &Matrix, activations: &[Matrix]) {
        let optimizer = self.optimizer;
        let (Some(layers), Some(prediction)) = (self.layers.as_mut(), activations.last()) else {
            return;
        };
        let mut error = labels - prediction;

        for i in (0..layers.len()).rev() {
            let delta = calc_derivatives(&activations[i], &error);

            if i > 0 {
                error = &delta * &layers[i].weights.transpose();
            }

            let fed = if i == 0 { inputs } else { &activations[i - 1] };
            optimizer.step(&mut layers[i], fed, &delta);
        }
    }

    fn check_inputs(&self, inputs: &Matrix, context: &'static str) -> Result<()> {
        if inputs.cols != self.config.input_neurons {
            return Err(NetworkError::ShapeMismatch {
                context,
                expected: self.config.input_neurons,
                actual: inputs.cols,
            });
        }
        Ok(())
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
