use std::path::PathBuf;

use clap::Parser;
use sigmoid_mlp::{subset_accuracy, Dataset, Network, NetworkConfig};

/// Train a sigmoid MLP on a CSV dataset and report test-set accuracy.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long)]
    /// JSON network config. When given, the architecture and training flags below are ignored.
    config: Option<PathBuf>,

    #[arg(long, default_value = "data/train.csv")]
    /// Training CSV: header row, feature columns, then one-hot label columns.
    train: PathBuf,

    #[arg(long, default_value = "data/test.csv")]
    /// Test CSV in the same layout as the training file.
    test: PathBuf,

    #[arg(long, default_value_t = 4)]
    /// Number of feature columns (input neurons).
    inputs: usize,

    #[arg(long, default_value_t = 3)]
    /// Number of one-hot label columns (output neurons).
    outputs: usize,

    #[arg(long = "hidden", default_values_t = [10])]
    /// Hidden layer width; repeat the flag for several hidden layers.
    hidden_layers: Vec<usize>,

    #[arg(long, conflicts_with = "hidden_layers")]
    /// Connect the inputs straight to the output layer, without hidden layers.
    no_hidden: bool,

    #[arg(long, default_value_t = 5000)]
    /// Number of full-batch training epochs.
    epochs: usize,

    #[arg(long, default_value_t = 0.3)]
    /// Fixed gradient-descent step size.
    learning_rate: f64,

    #[arg(long)]
    /// Seed for weight initialisation. Defaults to the current time.
    seed: Option<u64>,
}

impl Cli {
    fn network_config(&self) -> anyhow::Result<NetworkConfig> {
        if let Some(path) = &self.config {
            let mut config = NetworkConfig::load_json(path)?;
            if self.seed.is_some() {
                config.seed = self.seed;
            }
            return Ok(config);
        }

        Ok(NetworkConfig {
            input_neurons: self.inputs,
            output_neurons: self.outputs,
            hidden_layers: if self.no_hidden { Vec::new() } else { self.hidden_layers.clone() },
            epochs: self.epochs,
            learning_rate: self.learning_rate,
            seed: self.seed,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.network_config()?;

    let train = Dataset::load_csv(&cli.train, config.input_neurons, config.output_neurons)?;
    let test = Dataset::load_csv(&cli.test, config.input_neurons, config.output_neurons)?;
    log::info!("Loaded {} training and {} test examples", train.len(), test.len());

    let mut network = Network::new(config)?;
    network.train(&train.inputs, &train.labels)?;

    let predictions = network.predict(&test.inputs)?;
    let accuracy = subset_accuracy(&predictions, &test.labels)?;

    println!("\nAccuracy = {accuracy:0.2}\n");

    Ok(())
}
