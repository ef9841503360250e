use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for negation.
#[derive(Debug)]
struct NegBackward {
    a: Value,
}

impl BackwardOp for NegBackward {
    fn kind(&self) -> OpKind {
        OpKind::Neg
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        Ok(vec![-grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

/// Negates a node.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), Rc::new(NegBackward { a: a.clone() }))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
