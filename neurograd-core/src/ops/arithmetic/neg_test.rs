use super::*;

#[test]
fn test_neg_forward() {
    let a = Value::new(1.5);
    let b = neg_op(&a);
    assert_eq!(b.data(), -1.5);
    assert_eq!(b.op_kind(), OpKind::Neg);
    assert_eq!(neg_op(&Value::new(0.0)).data(), 0.0);
}

#[test]
fn test_neg_backward() -> Result<(), NeuroGradError> {
    let a = Value::new(4.0);
    let b = neg_op(&a);
    b.backward()?;
    assert_eq!(a.grad(), -1.0);
    Ok(())
}

#[test]
fn test_double_neg_backward() -> Result<(), NeuroGradError> {
    let a = Value::new(4.0);
    let b = neg_op(&neg_op(&a));
    assert_eq!(b.data(), 4.0);
    b.backward()?;
    assert_eq!(a.grad(), 1.0);
    Ok(())
}
