use crate::error::NeuroGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuroGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NeuroGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    NumericalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Invalid gradient check argument: {0}")]
    InvalidArgument(String),
}

// Map NeuroGradError to GradCheckError::ForwardPassError
impl From<NeuroGradError> for GradCheckError {
    fn from(err: NeuroGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Estimates \( \frac{\partial f}{\partial x_i} \) by central differences:
/// \\[ \frac{f(x + \epsilon e_i) - f(x - \epsilon e_i)}{2\epsilon} \\]
///
/// `func` is called on fresh leaf nodes built from `inputs` each time, so no gradient
/// state leaks between evaluations.
pub fn numerical_grad<F>(func: F, inputs: &[f64], epsilon: f64) -> Result<Vec<f64>, NeuroGradError>
where
    F: Fn(&[Value]) -> Result<Value, NeuroGradError>,
{
    if epsilon.is_nan() || epsilon <= 0.0 {
        return Err(NeuroGradError::InvalidConfig(format!(
            "finite-difference epsilon must be positive, got {}",
            epsilon
        )));
    }

    let eval = |data: &[f64]| -> Result<f64, NeuroGradError> {
        let leaves: Vec<Value> = data.iter().map(|&x| Value::new(x)).collect();
        Ok(func(&leaves)?.data())
    };

    let mut grads = Vec::with_capacity(inputs.len());
    let mut perturbed = inputs.to_vec();
    for i in 0..inputs.len() {
        perturbed[i] = inputs[i] + epsilon;
        let loss_plus = eval(&perturbed)?;
        perturbed[i] = inputs[i] - epsilon;
        let loss_minus = eval(&perturbed)?;
        perturbed[i] = inputs[i];
        grads.push((loss_plus - loss_minus) / (2.0 * epsilon));
    }
    Ok(grads)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds one leaf per entry of `inputs`, runs `func` then `backward()` on its output,
/// and compares every leaf's gradient with the central-difference estimate. A pair
/// passes if it is within `tolerance` absolutely **or** relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NeuroGradError>,
{
    if tolerance.is_nan() || tolerance <= 0.0 {
        return Err(GradCheckError::InvalidArgument(format!(
            "tolerance must be positive, got {}",
            tolerance
        )));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients ---
    let numerical = numerical_grad(&func, inputs, epsilon)?;

    // --- 3. Compare ---
    for (i, (leaf, numerical_grad)) in leaves.iter().zip(numerical).enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value: numerical_grad,
            });
        }
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
