//! Trains an MLP on the two-moons problem and draws the decision boundary.
//!
//! `*` marks points the network scores above 0.5, `.` the others; dataset
//! points are shown as `0` and `1` by label.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, Mlp, Module, Role, ScalarGradError, TrainConfig, Trainer};
use scalargrad_data::moons;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(1337);
    let data = moons(200, &mut rng);

    let mut graph = Graph::new();
    let mlp = Mlp::new(&mut graph, &mut rng, &[2, 8, 4, 1])?;

    let config = TrainConfig::new().with_steps(100).with_learning_rate(0.2);
    let report = Trainer::new(config).fit(&mut graph, &mlp, data.inputs(), data.targets())?;
    for (step, loss) in report.losses.iter().enumerate() {
        println!("{} {}", step, loss);
    }

    // Grid over [-2, 2) x [-1, 1) in steps of 0.1.
    let mark = graph.mark();
    for row in -10..10 {
        let mut line = String::new();
        for col in -20..20 {
            let (x, y) = (col as f64 / 10.0, row as f64 / 10.0);
            let point = data
                .iter()
                .position(|(p, _)| (p[0] * 10.0) as i32 == col && (p[1] * 10.0) as i32 == row);
            let inputs = [graph.leaf(x, Role::Input), graph.leaf(y, Role::Input)];
            let out = mlp.evaluate(&mut graph, &inputs)?;
            let score = graph.value(out[0])?;
            graph.rewind(mark);

            let cell = match point {
                Some(i) if data.targets()[i][0] > 0.0 => '1',
                Some(_) => '0',
                None if score > 0.5 => '*',
                None => '.',
            };
            line.push(cell);
        }
        println!("{}", line);
    }
    Ok(())
}
