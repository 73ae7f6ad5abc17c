use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{NetworkError, Result};
use crate::layers::dense::LayerShape;

/// Immutable description of a network and its training run.
///
/// Stored as JSON by `save_json` / `load_json`. `hidden_layers` may be written
/// either as a single width (`10`) or as an ordered list (`[10, 5]`); an empty
/// list connects the inputs straight to the output layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_neurons: usize,
    pub output_neurons: usize,
    #[serde(deserialize_with = "scalar_or_list")]
    pub hidden_layers: Vec<usize>,
    pub epochs: usize,
    pub learning_rate: f64,
    /// Seed for parameter initialisation; the wall clock is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(
        input_neurons: usize,
        output_neurons: usize,
        hidden_layers: Vec<usize>,
        epochs: usize,
        learning_rate: f64,
    ) -> NetworkConfig {
        NetworkConfig {
            input_neurons,
            output_neurons,
            hidden_layers,
            epochs,
            learning_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> NetworkConfig {
        self.seed = Some(seed);
        self
    }

    /// Ordered layer transitions: input→hidden₁, …, hidden_last→output.
    pub fn layer_shapes(&self) -> Vec<LayerShape> {
        let mut shapes = Vec::with_capacity(self.hidden_layers.len() + 1);
        let mut fan_in = self.input_neurons;
        for &width in &self.hidden_layers {
            shapes.push(LayerShape::new(fan_in, width));
            fan_in = width;
        }
        shapes.push(LayerShape::new(fan_in, self.output_neurons));
        shapes
    }

    /// Total number of weights across all layer transitions.
    pub fn count_edges(&self) -> usize {
        self.layer_shapes().iter().map(LayerShape::edges).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_neurons == 0 {
            return Err(NetworkError::InvalidConfig("input_neurons must be positive".into()));
        }
        if self.output_neurons == 0 {
            return Err(NetworkError::InvalidConfig("output_neurons must be positive".into()));
        }
        if let Some(i) = self.hidden_layers.iter().position(|&w| w == 0) {
            return Err(NetworkError::InvalidConfig(format!(
                "hidden layer {i} has zero width"
            )));
        }
        if self.epochs == 0 {
            return Err(NetworkError::InvalidConfig("epochs must be positive".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file written by `save_json` or by hand.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn scalar_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Widths {
        One(usize),
        Many(Vec<usize>),
    }

    Ok(match Widths::deserialize(deserializer)? {
        Widths::One(width) => vec![width],
        Widths::Many(widths) => widths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iris() -> NetworkConfig {
        NetworkConfig::new(4, 3, vec![10], 5000, 0.3)
    }

    #[test]
    fn layer_shapes_chain() {
        let config = NetworkConfig::new(4, 3, vec![10, 5], 1, 0.1);
        assert_eq!(
            config.layer_shapes(),
            vec![LayerShape::new(4, 10), LayerShape::new(10, 5), LayerShape::new(5, 3)]
        );
        assert_eq!(config.count_edges(), 40 + 50 + 15);
    }

    #[test]
    fn empty_hidden_layers_connect_input_to_output() {
        let config = NetworkConfig::new(2, 2, vec![], 1, 0.1);
        assert_eq!(config.layer_shapes(), vec![LayerShape::new(2, 2)]);
    }

    #[test]
    fn hidden_layers_accept_scalar() {
        let json = r#"{"input_neurons":4,"output_neurons":3,"hidden_layers":10,"epochs":5000,"learning_rate":0.3}"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, iris());
    }

    #[test]
    fn hidden_layers_accept_list_and_seed() {
        let json = r#"{"input_neurons":4,"output_neurons":3,"hidden_layers":[8,6],"epochs":10,"learning_rate":0.5,"seed":42}"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hidden_layers, vec![8, 6]);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("sigmoid-mlp-config-{}.json", std::process::id()));
        let config = iris().with_seed(3);

        config.save_json(&path).unwrap();
        let loaded = NetworkConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(iris().validate().is_ok());

        let cases = [
            NetworkConfig { input_neurons: 0, ..iris() },
            NetworkConfig { output_neurons: 0, ..iris() },
            NetworkConfig { hidden_layers: vec![4, 0], ..iris() },
            NetworkConfig { epochs: 0, ..iris() },
            NetworkConfig { learning_rate: 0.0, ..iris() },
            NetworkConfig { learning_rate: f64::NAN, ..iris() },
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(NetworkError::InvalidConfig(_))));
        }
    }
}
