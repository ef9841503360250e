use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.5);
    let c = mul_op(&a, &b);
    assert_relative_eq!(c.data(), -7.0);
    assert_eq!(c.op_kind(), OpKind::Mul);
    assert_eq!(c.operands().len(), 2);
}

#[test]
fn test_mul_backward() -> Result<(), NeuroGradError> {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = mul_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_mul_square_accumulates() -> Result<(), NeuroGradError> {
    // y = x * x => dy/dx = 2x, not x
    let x = Value::new(-1.25);
    let y = mul_op(&x, &x);
    y.backward()?;
    assert_relative_eq!(x.grad(), 2.0 * x.data());
    Ok(())
}

#[test]
fn test_mul_uses_forward_values() -> Result<(), NeuroGradError> {
    // The rule must use the values seen at forward time.
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let c = mul_op(&a, &b);
    b.set_data(100.0);
    c.backward()?;
    assert_eq!(a.grad(), 5.0);
    Ok(())
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    check_grad(|x| Ok(mul_op(&x[0], &x[1])), &[0.7, -2.3], 1e-6, 1e-6)
}
