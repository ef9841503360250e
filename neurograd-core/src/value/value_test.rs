use super::*;
use crate::autograd::grad_check::numerical_grad;
use crate::autograd::zero_grad;
use crate::error::NeuroGradError;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_leaf_construction() {
    let a = Value::new(3.25);
    assert_eq!(a.data(), 3.25);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.op_kind(), OpKind::Leaf);
    assert!(a.is_leaf());
    assert!(a.operands().is_empty());
    assert!(a.grad_fn().is_none());
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    b.set_data(2.0);
    assert_eq!(a.data(), 2.0);
    assert!(!a.ptr_eq(&Value::new(2.0)));
}

#[test]
fn test_add_mul_values() {
    let samples = [(0.0, 0.0), (1.5, -2.25), (-3.0, 7.0), (1e10, 1e-10)];
    for &(a, b) in &samples {
        assert_eq!((&Value::new(a) + &Value::new(b)).data(), a + b);
        assert_eq!((&Value::new(a) * &Value::new(b)).data(), a * b);
    }
}

#[test]
fn test_operators_with_constants() -> Result<(), NeuroGradError> {
    let x = Value::new(2.0);
    let y = 3.0 * &x + 1.0;
    assert_eq!(y.data(), 7.0);
    let z = &x - 0.5;
    assert_eq!(z.data(), 1.5);
    let w = 1.0 - x.clone();
    assert_eq!(w.data(), -1.0);
    let n = -&x;
    assert_eq!(n.data(), -2.0);

    y.backward()?;
    assert_eq!(x.grad(), 3.0);
    Ok(())
}

#[test]
fn test_neuron_like_expression_gradients() -> Result<(), NeuroGradError> {
    // f = tanh(w*x + b)
    let (w_val, x_val, b_val) = (0.7, -1.3, 0.25);
    let w = Value::new(w_val);
    let x = Value::new(x_val);
    let b = Value::new(b_val);
    let f = (&w * &x + &b).tanh();
    f.backward()?;

    // Closed form: df/dz = 1 - tanh(z)^2
    let z = w_val * x_val + b_val;
    let dz = 1.0 - z.tanh().powi(2);
    assert_abs_diff_eq!(w.grad(), dz * x_val, epsilon = 1e-6);
    assert_abs_diff_eq!(x.grad(), dz * w_val, epsilon = 1e-6);
    assert_abs_diff_eq!(b.grad(), dz, epsilon = 1e-6);

    // Finite differences
    let numeric = numerical_grad(
        |v| Ok((&v[0] * &v[1] + &v[2]).tanh()),
        &[w_val, x_val, b_val],
        1e-6,
    )?;
    assert_abs_diff_eq!(w.grad(), numeric[0], epsilon = 1e-4);
    assert_abs_diff_eq!(x.grad(), numeric[1], epsilon = 1e-4);
    assert_abs_diff_eq!(b.grad(), numeric[2], epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_shared_subterm_accumulates() -> Result<(), NeuroGradError> {
    let x = Value::new(3.0);
    let y = &x * &x;
    y.backward()?;
    assert_eq!(x.grad(), 2.0 * x.data());
    Ok(())
}

#[test]
fn test_diamond_dependency() -> Result<(), NeuroGradError> {
    // a feeds b and c, both feed d: dd/da = db/da + dc/da
    let a = Value::new(2.0);
    let b = &a * 3.0;
    let c = a.pow(2.0)?;
    let d = &b + &c;
    d.backward()?;
    assert_relative_eq!(a.grad(), 3.0 + 2.0 * 2.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
    Ok(())
}

#[test]
fn test_backward_does_not_reset_gradients() -> Result<(), NeuroGradError> {
    // Two passes without a reset accumulate into the leaves.
    let x = Value::new(1.5);
    let y = &x * 2.0;
    y.backward()?;
    assert_eq!(x.grad(), 2.0);
    let z = &x * 5.0;
    z.backward()?;
    assert_eq!(x.grad(), 7.0);
    Ok(())
}

#[test]
fn test_zero_grad_idempotent_and_reproducible() -> Result<(), NeuroGradError> {
    let w = Value::new(-0.4);
    let x = Value::new(0.9);
    let f = (&w * &x + 0.1).tanh();
    f.backward()?;
    let (gw, gx) = (w.grad(), x.grad());

    zero_grad(&[&w, &x]);
    zero_grad(&[&w, &x]);
    assert_eq!(w.grad(), 0.0);
    assert_eq!(x.grad(), 0.0);

    // Fresh graph, same parameters.
    let f2 = (&w * &x + 0.1).tanh();
    f2.backward()?;
    assert_eq!(w.grad(), gw);
    assert_eq!(x.grad(), gx);
    Ok(())
}

#[test]
fn test_unreachable_nodes_untouched() -> Result<(), NeuroGradError> {
    let a = Value::new(1.0);
    let unrelated = Value::new(5.0);
    let other = &unrelated * 2.0;
    other.backward()?;
    assert_eq!(unrelated.grad(), 2.0);

    let y = &a + 1.0;
    y.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(unrelated.grad(), 2.0);
    Ok(())
}

#[test]
fn test_backward_on_leaf() -> Result<(), NeuroGradError> {
    let a = Value::new(4.0);
    a.backward()?;
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_deep_chain_backward() -> Result<(), NeuroGradError> {
    let x = Value::new(0.5);
    let mut acc = Value::new(0.0);
    for _ in 0..100_000 {
        acc = &acc + &x;
    }
    acc.backward()?;
    assert_eq!(x.grad(), 100_000.0);

    // Releasing the root frees the whole chain without recursing through it.
    drop(acc);
    assert_eq!(x.grad(), 100_000.0);
    assert!(x.is_leaf());
    Ok(())
}

#[test]
fn test_dropping_deep_chain_keeps_shared_subgraph() -> Result<(), NeuroGradError> {
    let x = Value::new(2.0);
    let mut acc = x.tanh();
    let midpoint = {
        for _ in 0..50_000 {
            acc = &acc * 1.0;
        }
        acc.clone()
    };
    for _ in 0..50_000 {
        acc = &acc + 0.0;
    }
    drop(acc);

    // The part still reachable from `midpoint` keeps its operands.
    assert_eq!(midpoint.op_kind(), OpKind::Mul);
    midpoint.backward()?;
    assert_relative_eq!(x.grad(), 1.0 - 2.0f64.tanh().powi(2), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_display_and_debug() {
    let a = Value::new(1.0);
    let b = &a * 2.0;
    assert_eq!(format!("{}", b), "Value(data=2.0000, grad=0.0000, op=mul)");
    let debug = format!("{:?}", b);
    assert!(debug.contains("Mul"));
    assert!(debug.contains("data: 2.0"));
}
