use neurograd_core::model::Mlp;
use neurograd_core::nn::persistence::{
    load_parameters, parameter_values, save_parameters, LoadOutcome,
};
use neurograd_core::nn::losses::Reduction;
use neurograd_core::nn::{Activation, Initializer, MSELoss, Module, Neuron};
use neurograd_core::optim::{Optimizer, Sgd};
use neurograd_core::utils::testing::{check_grads_near, leaves, temp_path};
use neurograd_core::NeuroGradError;

mod common;

#[test]
fn balanced_neuron_scenario() -> Result<(), NeuroGradError> {
    common::init_logger();
    let neuron = Neuron::from_weights(&[0.5, -0.5], 0.0, Activation::Tanh);
    let inputs = leaves(&[1.0, 1.0]);
    let out = neuron.forward(&inputs)?.into_scalar()?;
    assert_eq!(out.data(), 0.0);

    out.backward()?;
    assert_eq!(out.grad(), 1.0);
    let weights: Vec<_> = neuron.weights().iter().map(|w| w.value().clone()).collect();
    check_grads_near(&weights, &[1.0, 1.0], 1e-12);
    Ok(())
}

#[test]
fn persistence_roundtrip_reproduces_outputs() -> Result<(), NeuroGradError> {
    common::init_logger();
    let path = temp_path("e2e_roundtrip");
    let x = [0.3, -1.2, 0.7];

    let original = Mlp::new(3, &[4, 4, 1], &mut common::seeded_rng(1234))?;
    let expected = original.forward_numeric(&x)?.data();
    save_parameters(&original, &path)?;

    let restored = Mlp::new(3, &[4, 4, 1], &mut common::seeded_rng(4321))?;
    assert_eq!(
        load_parameters(&restored, &path)?,
        LoadOutcome::Restored {
            count: original.num_parameters()
        }
    );
    let actual = restored.forward_numeric(&x)?.data();
    let bits = |v: &[f64]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&expected), bits(&actual));

    std::fs::remove_file(&path).ok();
    Ok(())
}

#[test]
fn load_rejects_other_topology_and_reports_missing_file() -> Result<(), NeuroGradError> {
    common::init_logger();
    let path = temp_path("e2e_topology");
    let small = Mlp::new(2, &[2, 1], &mut common::seeded_rng(1))?;
    save_parameters(&small, &path)?;

    let big = Mlp::new(2, &[3, 1], &mut common::seeded_rng(2))?;
    let before = parameter_values(&big);
    assert_eq!(
        load_parameters(&big, &path).unwrap_err(),
        NeuroGradError::ParameterCountMismatch {
            expected: big.num_parameters(),
            actual: small.num_parameters()
        }
    );
    assert_eq!(parameter_values(&big), before);

    std::fs::remove_file(&path).ok();
    assert_eq!(load_parameters(&big, &path)?, LoadOutcome::NotFound);
    Ok(())
}

#[test]
fn training_reduces_loss() -> Result<(), NeuroGradError> {
    common::init_logger();
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mlp = Mlp::with_config(
        3,
        &[4, 4, 1],
        Activation::Tanh,
        &Initializer::default(),
        &mut common::seeded_rng(7),
    )?;
    let mut optimizer = Sgd::new(mlp.parameters(), 0.05, 0.0)?;
    let loss_fn = MSELoss::new(Reduction::Sum);

    let mut losses = Vec::new();
    for _ in 0..200 {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.push(mlp.forward_numeric(x)?.into_scalar()?);
        }
        let loss = loss_fn.calculate(&preds, &ys)?;
        losses.push(loss.data());

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;
    }
    let (first_loss, last_loss) = (losses[0], losses[losses.len() - 1]);
    assert!(
        last_loss < 0.5 * first_loss,
        "loss went from {} to {}",
        first_loss,
        last_loss
    );
    Ok(())
}
