//! Saving and restoring the parameter values of a [`Module`].
//!
//! The on-disk format is a small versioned JSON document:
//!
//! ```json
//! { "format_version": 1, "values": [0.12, -0.5, ...] }
//! ```
//!
//! Values are stored in [`Module::parameters`] order and restored by position, so a
//! file can only be loaded into a network with the same topology. Only forward values
//! are persisted; gradients are not.

use crate::error::NeuroGradError;
use crate::nn::module::Module;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SavedParameters {
    format_version: u32,
    values: Vec<f64>,
}

/// Outcome of [`load_parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Every parameter was overwritten with the stored value.
    Restored { count: usize },
    /// No file exists at the path; the module was left untouched.
    NotFound,
}

/// Returns the current value of every parameter, in [`Module::parameters`] order.
pub fn parameter_values<M: Module + ?Sized>(module: &M) -> Vec<f64> {
    module.parameters().iter().map(|p| p.data()).collect()
}

/// Overwrites every parameter with the value at the same position in `values`.
///
/// # Errors
/// `ParameterCountMismatch` if `values` does not hold exactly one value per parameter.
/// Nothing is written in that case.
pub fn set_parameter_values<M: Module + ?Sized>(
    module: &M,
    values: &[f64],
) -> Result<(), NeuroGradError> {
    let params = module.parameters();
    if params.len() != values.len() {
        return Err(NeuroGradError::ParameterCountMismatch {
            expected: params.len(),
            actual: values.len(),
        });
    }
    for (param, &value) in params.iter().zip(values) {
        param.set_data(value);
    }
    Ok(())
}

/// Writes the module's parameter values to `path`, replacing any existing file.
///
/// The document is written to a hidden sibling file and then renamed over `path`, so
/// a failed save leaves the previous file intact.
///
/// # Errors
/// * `DomainError` if a parameter is NaN or infinite (JSON cannot represent it).
/// * `StorageError` if the file cannot be written.
pub fn save_parameters<M: Module + ?Sized, P: AsRef<Path>>(
    module: &M,
    path: P,
) -> Result<(), NeuroGradError> {
    let path = path.as_ref();
    let values = parameter_values(module);
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(NeuroGradError::domain(
            "save_parameters",
            format!("parameter {} is not finite ({})", i, values[i]),
        ));
    }

    let saved = SavedParameters {
        format_version: FORMAT_VERSION,
        values,
    };
    let storage_error = |reason: String| NeuroGradError::StorageError {
        path: path.display().to_string(),
        reason,
    };
    let json = serde_json::to_string(&saved).map_err(|e| storage_error(e.to_string()))?;

    // Write a sibling file first so an interrupted save never truncates the previous one.
    let tmp_path =
        staging_path(path).ok_or_else(|| storage_error("not a file path".to_string()))?;
    std::fs::write(&tmp_path, json).map_err(|e| {
        std::fs::remove_file(&tmp_path).ok();
        storage_error(e.to_string())
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| {
        std::fs::remove_file(&tmp_path).ok();
        storage_error(e.to_string())
    })?;

    info!(
        "Saved {} parameters to {}",
        saved.values.len(),
        path.display()
    );
    Ok(())
}

/// `<dir>/.<name>.tmp` next to `path`, or `None` if `path` has no file name.
fn staging_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".tmp");
    Some(path.with_file_name(staged))
}

/// Restores the module's parameter values from `path`.
///
/// A missing file is not an error: the module is left untouched and
/// `LoadOutcome::NotFound` is returned.
///
/// # Errors
/// * `StorageError` if the file exists but cannot be read.
/// * `CorruptedState` if it is not a valid parameter file, or has an unknown format
///   version.
/// * `ParameterCountMismatch` if it holds a different number of values than the module
///   has parameters. No parameter is modified in that case.
pub fn load_parameters<M: Module + ?Sized, P: AsRef<Path>>(
    module: &M,
    path: P,
) -> Result<LoadOutcome, NeuroGradError> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No existing model could be found at path {}", path.display());
            return Ok(LoadOutcome::NotFound);
        }
        Err(e) => {
            return Err(NeuroGradError::StorageError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
    };

    let saved: SavedParameters = serde_json::from_str(&contents).map_err(|e| {
        NeuroGradError::CorruptedState(format!("{}: {}", path.display(), e))
    })?;
    if saved.format_version != FORMAT_VERSION {
        return Err(NeuroGradError::CorruptedState(format!(
            "{}: unsupported format_version {}; expected {}",
            path.display(),
            saved.format_version,
            FORMAT_VERSION
        )));
    }

    set_parameter_values(module, &saved.values)?;
    info!(
        "Restored {} parameters from {}",
        saved.values.len(),
        path.display()
    );
    Ok(LoadOutcome::Restored {
        count: saved.values.len(),
    })
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
