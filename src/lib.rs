//! hla_joint_binary — joint AA/HLA substitution submodel with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the joint binary AA/HLA model to Python via the `_hla_joint_binary`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing classes and the `joint_binary` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`joint_binary`) as the public crate
//!   surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_hla_joint_binary` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - Python-visible parameter vectors always use the flat order
//!   `[ETimesLambdaA, RTimesLambdaA, Lambda_Hla, P_AA, P_Hla]`; the
//!   unconstrained optimizer vector uses the same order.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the items guarded by the `python-bindings` feature.

pub mod joint_binary;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;
#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    joint_binary::{
        core::{params::JointHlaParams, report::parameter_names},
        models::{
            binary::BinaryParams, distribution::DiscreteDistribution,
            joint_hla::JointBinaryHlaModel,
        },
    },
    utils::{build_joint_options, extract_f64_vec, resolve_params},
};

/// JointHla — Python-facing wrapper for [`JointBinaryHlaModel`].
///
/// Constructed from Python via
/// `JointHla(empirical_aa_equilibrium, force_symmetric_aa_rates=None, ...)`.
/// Optional `params` arguments take a flat vector; when omitted the model's
/// current start point is used.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "hla_joint_binary.joint_binary")]
pub struct JointHla {
    /// Underlying Rust model.
    pub inner: JointBinaryHlaModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl JointHla {
    #[new]
    #[pyo3(
        signature = (
            empirical_aa_equilibrium,
            force_symmetric_aa_rates = None,
            eigen_eps = None,
            eigen_max_iter = None,
        ),
        text_signature = "(empirical_aa_equilibrium, /, force_symmetric_aa_rates=None, \
                          eigen_eps=None, eigen_max_iter=None)"
    )]
    pub fn new(
        empirical_aa_equilibrium: f64, force_symmetric_aa_rates: Option<bool>,
        eigen_eps: Option<f64>, eigen_max_iter: Option<usize>,
    ) -> PyResult<Self> {
        let options = build_joint_options(force_symmetric_aa_rates, eigen_eps, eigen_max_iter)?;
        Ok(JointHla { inner: JointBinaryHlaModel::new(empirical_aa_equilibrium, options)? })
    }

    #[getter]
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    #[staticmethod]
    pub fn parameter_names() -> Vec<&'static str> {
        parameter_names().to_vec()
    }

    /// Current start point as a flat vector.
    pub fn default_parameters(&self) -> Vec<f64> {
        self.inner.default_parameters().to_flat().to_vec()
    }

    pub fn set_initial_params<'py>(
        &mut self, py: Python<'py>, params: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        let params = resolve_params(py, &self.inner, Some(params))?;
        self.inner.set_initial_params(params);
        Ok(())
    }

    pub fn init_from_independent_models(
        &mut self, hla_equilibrium: f64, hla_rate: f64, aa_equilibrium: f64, aa_rate: f64,
    ) -> PyResult<()> {
        let hla = BinaryParams::new(hla_equilibrium, hla_rate)?;
        let aa = BinaryParams::new(aa_equilibrium, aa_rate)?;
        self.inner.init_from_independent_models(&hla, &aa)?;
        Ok(())
    }

    #[pyo3(signature = (params = None))]
    pub fn prior_probabilities<'py>(
        &self, py: Python<'py>, params: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Vec<f64>> {
        let params = resolve_params(py, &self.inner, params)?;
        Ok(self.inner.prior_probabilities(&params)?.to_vec())
    }

    #[pyo3(signature = (t, params = None))]
    pub fn transition_probability_matrix<'py>(
        &self, py: Python<'py>, t: f64, params: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Vec<Vec<f64>>> {
        let params = resolve_params(py, &self.inner, params)?;
        let p = self.inner.transition_probability_matrix(&params, t)?;
        Ok(p.rows().into_iter().map(|row| row.to_vec()).collect())
    }

    #[pyo3(signature = (suffix = ""))]
    pub fn header_string(&self, suffix: &str) -> String {
        self.inner.header_string(suffix)
    }

    #[pyo3(signature = (params = None))]
    pub fn value_string<'py>(
        &self, py: Python<'py>, params: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<String> {
        let params = resolve_params(py, &self.inner, params)?;
        Ok(self.inner.value_string(&params))
    }

    /// Unconstrained optimizer coordinates of `params` (flat order).
    #[pyo3(signature = (params = None))]
    pub fn to_theta<'py>(
        &self, py: Python<'py>, params: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Vec<f64>> {
        let params = resolve_params(py, &self.inner, params)?;
        Ok(params.to_theta().to_vec())
    }

    /// Flat parameter vector of the unconstrained coordinates `theta`.
    pub fn from_theta<'py>(
        &self, py: Python<'py>, theta: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let theta = Array1::from(extract_f64_vec(py, theta, "theta")?);
        Ok(JointHlaParams::from_theta(&theta)?.to_flat().to_vec())
    }
}

/// PyO3 module initializer: registers the `joint_binary` submodule and makes
/// it importable as `hla_joint_binary.joint_binary`.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _hla_joint_binary<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let joint_binary_mod = PyModule::new(py, "joint_binary")?;
    joint_binary_mod.add_class::<JointHla>()?;
    m.add_submodule(&joint_binary_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    py.import("sys")?
        .getattr("modules")?
        .set_item("hla_joint_binary.joint_binary", joint_binary_mod)?;
    Ok(())
}
