use scalargrad_core::{Graph, ScalarGradError};

mod common;

#[test]
fn test_sanity_check() -> Result<(), ScalarGradError> {
    common::init_logger();
    let mut g = Graph::new();
    let x = g.scalar(-4.0);

    // z = 2 * x + 2 + x
    let two = g.constant(2.0);
    let two_x = g.mul(two, x)?;
    let two_b = g.constant(2.0);
    let z = g.add(two_x, two_b)?;
    let z = g.add(z, x)?;
    // q = relu(z) + z * x
    let rz = g.relu(z)?;
    let zx = g.mul(z, x)?;
    let q = g.add(rz, zx)?;
    // h = relu(z * z)
    let zz = g.mul(z, z)?;
    let h = g.relu(zz)?;
    // y = h + q + q * x
    let hq = g.add(h, q)?;
    let qx = g.mul(q, x)?;
    let y = g.add(hq, qx)?;

    g.backward(y)?;
    assert_eq!(g.value(y)?, -20.0);
    assert_eq!(g.grad(x)?, 46.0);
    Ok(())
}

#[test]
fn test_more_ops() -> Result<(), ScalarGradError> {
    common::init_logger();
    let mut g = Graph::new();
    let a = g.scalar(-4.0);
    let b = g.scalar(2.0);

    let mut c = g.add(a, b)?;
    let ab = g.mul(a, b)?;
    let b3 = g.pow(b, 3.0)?;
    let mut d = g.add(ab, b3)?;

    // c = c + (c + 1)
    let one = g.constant(1.0);
    let c1 = g.add(c, one)?;
    c = g.add(c, c1)?;
    // c = c + (1 + c - a)
    let one = g.constant(1.0);
    let t = g.add(one, c)?;
    let t = g.sub(t, a)?;
    c = g.add(c, t)?;
    // d = d + (d * 2 + relu(b + a))
    let two = g.constant(2.0);
    let d2 = g.mul(d, two)?;
    let ba = g.add(b, a)?;
    let r = g.relu(ba)?;
    let t = g.add(d2, r)?;
    d = g.add(d, t)?;
    // d = d + (3 * d + relu(b - a))
    let three = g.constant(3.0);
    let d3 = g.mul(three, d)?;
    let bma = g.sub(b, a)?;
    let r = g.relu(bma)?;
    let t = g.add(d3, r)?;
    d = g.add(d, t)?;

    let e = g.sub(c, d)?;
    let f = g.pow(e, 2.0)?;
    let two = g.constant(2.0);
    let half_f = g.div(f, two)?;
    let ten = g.constant(10.0);
    let ten_over_f = g.div(ten, f)?;
    let out = g.add(half_f, ten_over_f)?;

    g.backward(out)?;
    assert_eq!(g.value(out)?.floor(), 24.0);
    assert_eq!(g.grad(a)?.floor(), 138.0);
    assert_eq!(g.grad(b)?.floor(), 645.0);

    approx::assert_relative_eq!(g.value(out)?, 24.704081632653061, max_relative = 1e-6);
    approx::assert_relative_eq!(g.grad(a)?, 138.83381924198252, max_relative = 1e-6);
    approx::assert_relative_eq!(g.grad(b)?, 645.5772594752186, max_relative = 1e-6);
    Ok(())
}
