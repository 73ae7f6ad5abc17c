//! A small sigmoid multilayer perceptron trained by full-batch gradient
//! descent with backpropagation.
//!
//! ```
//! use sigmoid_mlp::{Matrix, Network, NetworkConfig};
//!
//! let inputs = Matrix::from_data(vec![vec![0.0, 0.1], vec![0.9, 1.0]]);
//! let labels = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
//!
//! let mut network = Network::with_seed(NetworkConfig::new(2, 2, vec![3], 200, 0.5), 7).unwrap();
//! network.train(&inputs, &labels).unwrap();
//! assert_eq!(network.predict(&inputs).unwrap().shape(), (2, 2));
//! ```

pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod errors;
pub mod eval;
pub mod data;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use layers::dense::{Layer, LayerShape};
pub use network::{Network, NetworkConfig};
pub use optim::gradient_descent::GradientDescent;
pub use errors::{NetworkError, Result};
pub use eval::accuracy::subset_accuracy;
pub use data::dataset::Dataset;
