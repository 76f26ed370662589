//! Python-boundary helpers: array extraction and option/data builders.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! converts loosely typed Python inputs into the validated Rust types of
//! [`joint_binary`](crate::joint_binary). Validation errors surface as
//! `ValueError` / `TypeError` on the Python side.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::joint_binary::{
    core::{
        options::{JointHlaOptions, RateOptions, StationaryOptions},
        params::JointHlaParams,
    },
    models::joint_hla::JointBinaryHlaModel,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Accept a contiguous 1-D `float64` numpy array, anything exposing
/// `to_numpy()` (pandas), or a plain sequence of floats. `what` names the
/// argument in the error message.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, what: &str,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        if arr.as_slice().is_ok() {
            return Ok(arr);
        }
    }
    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(arr) = obj.extract::<PyReadonlyArray1<f64>>() {
            if arr.as_slice().is_ok() {
                return Ok(arr);
            }
        }
    }
    let vec: Vec<f64> = raw.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(format!(
            "{what} must be a 1-D numpy.ndarray, pandas.Series, or sequence of float64"
        ))
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a Python array-like into a `Vec<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, what: &str,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, raw, what)?;
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err(format!("{what} must be contiguous")))?;
    Ok(slice.to_vec())
}

/// Flat parameter vector `[E, R, Lambda_Hla, P_AA, P_Hla]`, or the model's
/// current start point when `params` is `None`.
#[cfg(feature = "python-bindings")]
pub fn resolve_params<'py>(
    py: Python<'py>, model: &JointBinaryHlaModel, params: Option<&Bound<'py, PyAny>>,
) -> PyResult<JointHlaParams> {
    match params {
        None => Ok(model.default_parameters()),
        Some(raw) => {
            let flat = extract_f64_vec(py, raw, "params")?;
            Ok(JointHlaParams::from_flat(&flat)?)
        }
    }
}

#[cfg(feature = "python-bindings")]
pub fn build_joint_options(
    force_symmetric_aa_rates: Option<bool>, eigen_eps: Option<f64>,
    eigen_max_iter: Option<usize>,
) -> PyResult<JointHlaOptions> {
    let defaults = StationaryOptions::default();
    let stationary = StationaryOptions::new(
        eigen_eps.unwrap_or(defaults.eps),
        eigen_max_iter.unwrap_or(defaults.max_iter),
    )?;
    let rates = RateOptions::new(force_symmetric_aa_rates.unwrap_or(false));
    Ok(JointHlaOptions::new(rates, stationary))
}
