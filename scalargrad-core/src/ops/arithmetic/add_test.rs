use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::arithmetic::add_op;
use crate::types::{Op, Tag};

#[test]
fn test_add_forward() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.scalar(1.5);
    let b = graph.scalar(-4.0);
    let c = add_op(&mut graph, a, b)?;
    assert_eq!(graph.value(c)?, -2.5);
    assert_eq!(graph.operands(c)?, &[a, b]);
    assert_eq!(graph.local_derivatives(c)?, &[1.0, 1.0]);
    assert_eq!(graph.tag(c)?, Tag::Op(Op::Add));
    Ok(())
}

#[test]
fn test_add_does_not_touch_inputs() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.scalar(2.0);
    let b = graph.scalar(3.0);
    graph.add(a, b)?;
    assert_eq!(graph.value(a)?, 2.0);
    assert_eq!(graph.value(b)?, 3.0);
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_add_backward() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.scalar(2.0);
    let b = graph.scalar(3.0);
    let c = graph.add(a, b)?;
    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.scalar(5.0);
    let c = graph.add(a, a)?;
    graph.backward(c)?;
    assert_eq!(graph.value(c)?, 10.0);
    assert_eq!(graph.grad(a)?, 2.0);
    Ok(())
}

#[test]
fn test_add_unknown_node() {
    let mut graph = Graph::new();
    let a = graph.scalar(1.0);
    let result = graph.add(a, NodeId(7));
    assert_eq!(result, Err(ScalarGradError::UnknownNode { index: 7, len: 1 }));
    assert_eq!(graph.len(), 1, "no node should be built on failure");
}
