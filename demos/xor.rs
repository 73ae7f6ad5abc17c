use sigmoid_mlp::{subset_accuracy, Matrix, Network, NetworkConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let inputs = Matrix::from_data(vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ]);
    // One-hot: [xor = 0, xor = 1]
    let labels = Matrix::from_data(vec![
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
    ]);

    let config = NetworkConfig::new(2, 2, vec![4], 10000, 0.5).with_seed(42);
    let mut network = Network::new(config)?;
    network.train(&inputs, &labels)?;

    let predictions = network.predict(&inputs)?;
    for (input, scores) in inputs.data.iter().zip(&predictions.data) {
        println!("Input: {:?} -> Scores: [{:.4}, {:.4}]", input, scores[0], scores[1]);
    }
    println!("Accuracy = {:.2}", subset_accuracy(&predictions, &labels)?);

    Ok(())
}
