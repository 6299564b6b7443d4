use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_range_and_role() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    let ids = uniform(&mut graph, &mut rng, 200, -1.0, 1.0, Role::Weight)?;
    assert_eq!(ids.len(), 200);
    for &id in &ids {
        let v = graph.value(id)?;
        assert!((-1.0..=1.0).contains(&v));
        assert!(graph.tag(id)?.is_parameter());
    }
    // Independent draws: not all the same value.
    let first = graph.value(ids[0])?;
    assert!(ids.iter().any(|&id| graph.value(id).unwrap() != first));
    Ok(())
}

#[test]
fn test_uniform_is_reproducible_with_seed() -> Result<(), ScalarGradError> {
    let mut g1 = Graph::new();
    let mut g2 = Graph::new();
    let a = uniform(&mut g1, &mut StdRng::seed_from_u64(42), 5, -1.0, 1.0, Role::Weight)?;
    let b = uniform(&mut g2, &mut StdRng::seed_from_u64(42), 5, -1.0, 1.0, Role::Weight)?;
    assert_eq!(g1.values(&a)?, g2.values(&b)?);
    Ok(())
}

#[test]
fn test_uniform_invalid_range() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = uniform(&mut graph, &mut rng, 3, 1.0, -1.0, Role::Weight);
    assert!(matches!(result, Err(ScalarGradError::InvalidArchitecture(_))));
    assert!(graph.is_empty());
}

#[test]
fn test_zeros() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let b = zeros(&mut graph, Role::Bias);
    assert_eq!(graph.value(b)?, 0.0);
    assert!(graph.tag(b)?.is_parameter());
    Ok(())
}
