use scalargrad_core::{Graph, NodeId, Role};

// Each test binary includes this module; not every binary uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn leaves(graph: &mut Graph, values: &[f64], role: Role) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v, role)).collect()
}

/// The four XOR points and their labels.
#[allow(dead_code)]
pub fn xor_data() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    (
        vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
        vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
    )
}
