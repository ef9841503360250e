use super::*;
use crate::model::Mlp;
use crate::nn::layers::{Activation, Neuron};
use crate::utils::testing::temp_path;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_values_roundtrip_in_memory() -> Result<(), NeuroGradError> {
    let neuron = Neuron::from_weights(&[0.1, 0.2], 0.3, Activation::Tanh);
    assert_eq!(parameter_values(&neuron), vec![0.1, 0.2, 0.3]);
    set_parameter_values(&neuron, &[-1.0, -2.0, -3.0])?;
    assert_eq!(parameter_values(&neuron), vec![-1.0, -2.0, -3.0]);
    Ok(())
}

#[test]
fn test_count_mismatch_writes_nothing() {
    let neuron = Neuron::from_weights(&[0.1, 0.2], 0.3, Activation::Tanh);
    assert_eq!(
        set_parameter_values(&neuron, &[9.0, 9.0]).unwrap_err(),
        NeuroGradError::ParameterCountMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(parameter_values(&neuron), vec![0.1, 0.2, 0.3]);
}

#[test]
fn test_save_load_roundtrip_bit_identical() -> Result<(), NeuroGradError> {
    let path = temp_path("persistence_roundtrip");
    let trained = Mlp::new(3, &[4, 1], &mut StdRng::seed_from_u64(21))?;
    save_parameters(&trained, &path)?;

    let fresh = Mlp::new(3, &[4, 1], &mut StdRng::seed_from_u64(99))?;
    assert_ne!(parameter_values(&fresh), parameter_values(&trained));
    let outcome = load_parameters(&fresh, &path)?;
    assert_eq!(outcome, LoadOutcome::Restored { count: 21 });

    let original: Vec<u64> = parameter_values(&trained).iter().map(|v| v.to_bits()).collect();
    let restored: Vec<u64> = parameter_values(&fresh).iter().map(|v| v.to_bits()).collect();
    assert_eq!(original, restored);

    std::fs::remove_file(&path).ok();
    Ok(())
}

#[test]
fn test_missing_file_is_not_found() -> Result<(), NeuroGradError> {
    let path = temp_path("persistence_missing");
    std::fs::remove_file(&path).ok();
    let neuron = Neuron::from_weights(&[0.5], 0.5, Activation::Tanh);
    assert_eq!(load_parameters(&neuron, &path)?, LoadOutcome::NotFound);
    assert_eq!(parameter_values(&neuron), vec![0.5, 0.5]);
    Ok(())
}

#[test]
fn test_load_into_different_topology() -> Result<(), NeuroGradError> {
    let path = temp_path("persistence_topology");
    let small = Neuron::from_weights(&[1.0], 2.0, Activation::Tanh);
    save_parameters(&small, &path)?;

    let big = Neuron::from_weights(&[0.0, 0.0, 0.0], 0.0, Activation::Tanh);
    assert_eq!(
        load_parameters(&big, &path).unwrap_err(),
        NeuroGradError::ParameterCountMismatch {
            expected: 4,
            actual: 2
        }
    );
    assert_eq!(parameter_values(&big), vec![0.0; 4]);

    std::fs::remove_file(&path).ok();
    Ok(())
}

#[test]
fn test_corrupted_files() -> Result<(), NeuroGradError> {
    let neuron = Neuron::from_weights(&[1.0], 2.0, Activation::Tanh);
    let cases = [
        ("persistence_garbage", "not json at all"),
        ("persistence_shape", r#"{"values": [1.0, 2.0]}"#),
        ("persistence_version", r#"{"format_version": 7, "values": [1.0, 2.0]}"#),
    ];
    for (tag, contents) in cases {
        let path = temp_path(tag);
        std::fs::write(&path, contents).unwrap();
        assert!(matches!(
            load_parameters(&neuron, &path),
            Err(NeuroGradError::CorruptedState(_))
        ));
        std::fs::remove_file(&path).ok();
    }
    assert_eq!(parameter_values(&neuron), vec![1.0, 2.0]);
    Ok(())
}

#[test]
fn test_unreadable_path_is_storage_error() {
    // A directory exists but cannot be read as a file.
    let neuron = Neuron::from_weights(&[1.0], 2.0, Activation::Tanh);
    assert!(matches!(
        load_parameters(&neuron, std::env::temp_dir()),
        Err(NeuroGradError::StorageError { .. })
    ));
}

#[test]
fn test_non_finite_parameter_not_saved() {
    let path = temp_path("persistence_nan");
    let neuron = Neuron::from_weights(&[f64::NAN], 0.0, Activation::Tanh);
    assert!(matches!(
        save_parameters(&neuron, &path),
        Err(NeuroGradError::DomainError { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_save_replaces_previous_file_without_leftovers() -> Result<(), NeuroGradError> {
    let path = temp_path("persistence_replace");
    let first = Neuron::from_weights(&[1.0, 2.0], 3.0, Activation::Tanh);
    let second = Neuron::from_weights(&[-1.0, -2.0], -3.0, Activation::Tanh);
    save_parameters(&first, &path)?;
    save_parameters(&second, &path)?;

    let staged = staging_path(&path).unwrap();
    assert!(!staged.exists());

    let target = Neuron::from_weights(&[0.0, 0.0], 0.0, Activation::Tanh);
    load_parameters(&target, &path)?;
    assert_eq!(parameter_values(&target), vec![-1.0, -2.0, -3.0]);

    std::fs::remove_file(&path).ok();
    Ok(())
}

#[test]
fn test_failed_save_keeps_previous_file() -> Result<(), NeuroGradError> {
    let path = temp_path("persistence_failed_save");
    let saved = Neuron::from_weights(&[0.25, 0.5], 0.75, Activation::Tanh);
    save_parameters(&saved, &path)?;

    // A directory squatting on the staging path makes the next write fail.
    let staged = staging_path(&path).unwrap();
    std::fs::create_dir_all(&staged).unwrap();
    let other = Neuron::from_weights(&[9.0, 9.0], 9.0, Activation::Tanh);
    let result = save_parameters(&other, &path);
    std::fs::remove_dir_all(&staged).ok();
    assert!(matches!(result, Err(NeuroGradError::StorageError { .. })));

    let target = Neuron::from_weights(&[0.0, 0.0], 0.0, Activation::Tanh);
    assert_eq!(
        load_parameters(&target, &path)?,
        LoadOutcome::Restored { count: 3 }
    );
    assert_eq!(parameter_values(&target), vec![0.25, 0.5, 0.75]);

    std::fs::remove_file(&path).ok();
    Ok(())
}
