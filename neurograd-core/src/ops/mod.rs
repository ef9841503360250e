//! # Scalar Operations Module (`ops`)
//!
//! This module is the operation registry of the engine: every differentiable
//! elementary function lives here, grouped by category.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that
//!   performs the forward computation and links the result into the graph. Operations
//!   that cannot fail return a [`Value`]; the others return `Result<Value, _>`.
//! - **`Backward` Structs:** Each operation has a struct (e.g. `AddBackward`,
//!   `TanhBackward`) implementing [`BackwardOp`](crate::autograd::BackwardOp). It stores
//!   the forward values needed by the local derivative rule.
//! - **[`OpKind`]:** the tag recorded on every node, and the key used by
//!   [`apply_op`] / [`apply_named_op`] to dispatch by kind at runtime.
//! - **[`Operand`]:** accepted wherever a raw `f64` may stand in for a node.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, pow, plus the composite sub and div.
//! - [`activation`]: tanh, relu.
//! - [`math_elem`]: exp, ln.

use crate::error::NeuroGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Tag identifying the elementary operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Neg,
    Pow,
    Tanh,
    Exp,
    Ln,
    Relu,
}

impl OpKind {
    /// Every kind that [`apply_op`] can construct.
    pub const REGISTERED: [OpKind; 8] = [
        OpKind::Add,
        OpKind::Mul,
        OpKind::Neg,
        OpKind::Pow,
        OpKind::Tanh,
        OpKind::Exp,
        OpKind::Ln,
        OpKind::Relu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OpKind::Leaf => "leaf",
            OpKind::Add => "add",
            OpKind::Mul => "mul",
            OpKind::Neg => "neg",
            OpKind::Pow => "pow",
            OpKind::Tanh => "tanh",
            OpKind::Exp => "exp",
            OpKind::Ln => "ln",
            OpKind::Relu => "relu",
        }
    }

    /// Number of operands, counting the constant exponent of `pow`.
    pub fn arity(self) -> usize {
        match self {
            OpKind::Leaf => 0,
            OpKind::Add | OpKind::Mul | OpKind::Pow => 2,
            OpKind::Neg | OpKind::Tanh | OpKind::Exp | OpKind::Ln | OpKind::Relu => 1,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpKind {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leaf" => Ok(OpKind::Leaf),
            "add" => Ok(OpKind::Add),
            "mul" | "multiply" => Ok(OpKind::Mul),
            "neg" | "negate" => Ok(OpKind::Neg),
            "pow" | "power" => Ok(OpKind::Pow),
            "tanh" => Ok(OpKind::Tanh),
            "exp" => Ok(OpKind::Exp),
            "ln" | "log" => Ok(OpKind::Ln),
            "relu" => Ok(OpKind::Relu),
            other => Err(NeuroGradError::UnsupportedOperation(format!(
                "'{}' is not a registered operation",
                other
            ))),
        }
    }
}

/// A binary-operation argument: either an existing node or a raw constant.
///
/// Constants are normalised to fresh leaf nodes before they enter the graph, so every
/// edge of the DAG points at a [`Value`]. Gradient flowing into such a leaf is
/// computed but nobody holds the leaf to read it.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Constant(f64),
}

impl Operand {
    /// Returns the node, creating a leaf for a constant.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Node(value) => value,
            Operand::Constant(data) => Value::new(data),
        }
    }
}

impl From<f64> for Operand {
    fn from(data: f64) -> Self {
        Operand::Constant(data)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

/// Applies the operation `kind` to `lhs` (and `rhs` for binary operations).
///
/// # Errors
/// * `UnsupportedOperation` for `OpKind::Leaf` or a node exponent passed to `Pow`.
/// * `ArityMismatch` if `rhs` is given to a unary operation or missing for a binary one.
/// * `DomainError` from the operation itself (see `pow_op`, `ln_op`).
pub fn apply_op(
    kind: OpKind,
    lhs: &Value,
    rhs: Option<Operand>,
) -> Result<Value, NeuroGradError> {
    let given = 1 + usize::from(rhs.is_some());
    match (kind, rhs) {
        (OpKind::Leaf, _) => Err(NeuroGradError::UnsupportedOperation(
            "'leaf' is a node kind, not an operation".to_string(),
        )),
        (OpKind::Add, Some(rhs)) => Ok(arithmetic::add_op(lhs, &rhs.into_value())),
        (OpKind::Mul, Some(rhs)) => Ok(arithmetic::mul_op(lhs, &rhs.into_value())),
        (OpKind::Pow, Some(exponent)) => arithmetic::pow_op(lhs, exponent),
        (OpKind::Neg, None) => Ok(arithmetic::neg_op(lhs)),
        (OpKind::Tanh, None) => Ok(activation::tanh_op(lhs)),
        (OpKind::Relu, None) => Ok(activation::relu_op(lhs)),
        (OpKind::Exp, None) => Ok(math_elem::exp_op(lhs)),
        (OpKind::Ln, None) => math_elem::ln_op(lhs),
        (kind, _) => Err(NeuroGradError::ArityMismatch {
            operation: kind.name().to_string(),
            expected: kind.arity(),
            actual: given,
        }),
    }
}

/// Same as [`apply_op`], looking the operation up by name first.
///
/// # Errors
/// `UnsupportedOperation` if `name` is not registered, otherwise as [`apply_op`].
pub fn apply_named_op(
    name: &str,
    lhs: &Value,
    rhs: Option<Operand>,
) -> Result<Value, NeuroGradError> {
    let kind: OpKind = name.parse()?;
    apply_op(kind, lhs, rhs)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
