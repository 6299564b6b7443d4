use super::vec_dataset::VecDataset;

/// The four points of logical XOR with their 0/1 labels.
pub fn xor() -> VecDataset {
    let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    VecDataset {
        inputs,
        targets,
    }
}
