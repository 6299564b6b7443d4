use super::vec_dataset::VecDataset;
use rand::Rng;
use std::f64::consts::PI;

const NOISE: f64 = 0.1;

/// Generates the "two moons" classification problem.
///
/// For `t_k = k * 2π / n` with `t_k < π` (`k < ceil(n / 2)`) two points are
/// produced:
/// * label 0: `(cos t + u - 0.5, sin t + u - 0.3)`
/// * label 1: `(0.5 - cos t + u, 0.2 - sin t + u)`
///
/// where every `u` is an independent draw from `U(-0.1, 0.1)`. The result
/// holds `2 * ceil(n / 2)` points, alternating labels 0 and 1. `n == 0`
/// yields an empty dataset.
pub fn moons<R: Rng + ?Sized>(n: usize, rng: &mut R) -> VecDataset {
    let steps = (n + 1) / 2;
    let mut inputs = Vec::with_capacity(2 * steps);
    let mut targets = Vec::with_capacity(2 * steps);
    for k in 0..steps {
        let t = k as f64 * 2.0 * PI / n as f64;
        let (sin, cos) = t.sin_cos();
        inputs.push(vec![
            cos + rng.gen_range(-NOISE..NOISE) - 0.5,
            sin + rng.gen_range(-NOISE..NOISE) - 0.3,
        ]);
        targets.push(vec![0.0]);
        inputs.push(vec![
            0.5 - cos + rng.gen_range(-NOISE..NOISE),
            0.2 - sin + rng.gen_range(-NOISE..NOISE),
        ]);
        targets.push(vec![1.0]);
    }
    log::debug!("generated {} two-moons points", inputs.len());
    VecDataset { inputs, targets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_moons_size_and_labels() {
        let mut rng = StdRng::seed_from_u64(0);
        let data = moons(200, &mut rng);
        assert_eq!(data.len(), 200);
        for (i, y) in data.targets().iter().enumerate() {
            assert_eq!(y, &vec![(i % 2) as f64]);
        }
        assert_eq!(moons(7, &mut rng).len(), 8);
        assert!(moons(0, &mut rng).is_empty());
    }

    #[test]
    fn test_moons_points_follow_the_arcs() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = 20;
        let data = moons(n, &mut rng);
        for (k, pair) in data.inputs().chunks(2).enumerate() {
            let t = k as f64 * 2.0 * PI / n as f64;
            let upper = &pair[0];
            let lower = &pair[1];
            assert!((upper[0] - (t.cos() - 0.5)).abs() <= NOISE + 1e-12);
            assert!((upper[1] - (t.sin() - 0.3)).abs() <= NOISE + 1e-12);
            assert!((lower[0] - (0.5 - t.cos())).abs() <= NOISE + 1e-12);
            assert!((lower[1] - (0.2 - t.sin())).abs() <= NOISE + 1e-12);
        }
    }

    #[test]
    fn test_moons_reproducible() {
        let a = moons(50, &mut StdRng::seed_from_u64(3));
        let b = moons(50, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
