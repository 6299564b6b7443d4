//! Trains a small MLP on logical XOR and prints its predictions.
//!
//! Run with `RUST_LOG=info cargo run --example train_xor` to see the loss
//! log, or pass `--dot` to print the Graphviz graph of one prediction.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, Mlp, Module, Role, ScalarGradError, TrainConfig, Trainer};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();
    let print_dot = std::env::args().any(|arg| arg == "--dot");

    let xs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
    let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mlp = Mlp::new(&mut graph, &mut rng, &[2, 8, 1])?;
    println!("MLP {:?}: {} parameters", mlp.sizes(), mlp.num_parameters());

    let config = TrainConfig::new()
        .with_steps(500)
        .with_learning_rate(0.05)
        .with_log_interval(50);
    let report = Trainer::new(config).fit(&mut graph, &mlp, &xs, &ys)?;
    println!(
        "loss {:.4} -> {:.4}",
        report.first_loss().unwrap_or(f64::NAN),
        report.final_loss().unwrap_or(f64::NAN)
    );

    let mark = graph.mark();
    for x in &xs {
        let inputs: Vec<_> = x.iter().map(|&v| graph.leaf(v, Role::Input)).collect();
        let out = mlp.evaluate(&mut graph, &inputs)?;
        println!("{:?} -> {:.3}", x, graph.value(out[0])?);
        if print_dot && x == &xs[xs.len() - 1] {
            println!("{}", graph.to_dot(out[0])?);
        }
    }
    graph.rewind(mark);
    Ok(())
}
