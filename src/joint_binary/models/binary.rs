//! Single binary-character model.
//!
//! Two states, an equilibrium probability `p` of state 0 and a rate scale
//! `λ`. Rates are `0 → 1 = λ(1 − p)` and `1 → 0 = λp`, so the chain has the
//! closed form
//!
//! ```text
//! P(t) = Π + e^{−λt} (I − Π),   Π rows = [p, 1 − p]
//! ```
//!
//! and prior `[p, 1 − p]`. Parameters of an independently fitted
//! [`BinaryModel`] are what the joint AA/HLA model is initialized from.
use ndarray::{Array1, Array2, array};

use crate::joint_binary::{
    core::{bounds::BoundedParam, params::IndependentFit},
    errors::{JointError, JointResult},
    models::distribution::DiscreteDistribution,
};

pub const BINARY_STATE_COUNT: usize = 2;
pub const BINARY_PARAM_COUNT: usize = 2;

/// Print order of the flat vector and header.
pub const BINARY_HEADER_LABELS: [&str; BINARY_PARAM_COUNT] = ["Lambda", "Equilibrium"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryParams {
    equilibrium: BoundedParam,
    lambda: BoundedParam,
}

impl BinaryParams {
    pub fn new(equilibrium: f64, lambda: f64) -> JointResult<Self> {
        Ok(BinaryParams {
            equilibrium: BoundedParam::probability("Equilibrium", equilibrium)?,
            lambda: BoundedParam::factor("Lambda", lambda)?,
        })
    }

    pub fn equilibrium(&self) -> f64 {
        self.equilibrium.value()
    }

    pub fn lambda(&self) -> f64 {
        self.lambda.value()
    }

    /// `[Lambda, Equilibrium]`.
    pub fn from_flat(values: &[f64]) -> JointResult<Self> {
        match values {
            &[lambda, equilibrium] => Self::new(equilibrium, lambda),
            _ => Err(JointError::ThetaLengthMismatch {
                expected: BINARY_PARAM_COUNT,
                actual: values.len(),
            }),
        }
    }

    pub fn to_flat(&self) -> Array1<f64> {
        array![self.lambda(), self.equilibrium()]
    }

    pub fn to_theta(&self) -> Array1<f64> {
        array![self.lambda.to_unconstrained(), self.equilibrium.to_unconstrained()]
    }

    pub fn from_theta(theta: &Array1<f64>) -> JointResult<Self> {
        if theta.len() != BINARY_PARAM_COUNT {
            return Err(JointError::ThetaLengthMismatch {
                expected: BINARY_PARAM_COUNT,
                actual: theta.len(),
            });
        }
        let mut out = Self::new(0.5, 1.0)?;
        out.lambda.set_from_unconstrained(0, theta[0])?;
        out.equilibrium.set_from_unconstrained(1, theta[1])?;
        Ok(out)
    }
}

impl IndependentFit for BinaryParams {
    fn equilibrium(&self) -> f64 {
        self.equilibrium()
    }

    fn rate(&self) -> f64 {
        self.lambda()
    }
}

/// Binary model with an optional stored start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryModel {
    /// `(empirical equilibrium, λ = 1)`; used while no start point is stored.
    fallback: BinaryParams,
    pub initial_params: Option<BinaryParams>,
}

impl BinaryModel {
    /// # Errors
    /// [`JointError::InvalidProbability`] unless `empirical_equilibrium` is
    /// in `[0, 1]`.
    pub fn new(empirical_equilibrium: f64) -> JointResult<Self> {
        Ok(BinaryModel {
            fallback: BinaryParams::new(empirical_equilibrium, 1.0)?,
            initial_params: None,
        })
    }

    /// Stored start point, else `(empirical equilibrium, λ = 1)`.
    pub fn default_parameters(&self) -> BinaryParams {
        self.initial_params.unwrap_or(self.fallback)
    }

    pub fn empirical_equilibrium(&self) -> f64 {
        self.fallback.equilibrium()
    }
}

impl DiscreteDistribution for BinaryModel {
    type Params = BinaryParams;

    fn type_name(&self) -> &'static str {
        "Binary"
    }

    fn state_count(&self) -> usize {
        BINARY_STATE_COUNT
    }

    fn parameters(&self) -> BinaryParams {
        self.default_parameters()
    }

    fn set_initial_params(&mut self, params: BinaryParams) {
        self.initial_params = Some(params);
    }

    fn parameters_from_flat(&self, values: &[f64]) -> JointResult<BinaryParams> {
        BinaryParams::from_flat(values)
    }

    fn to_flat(&self, params: &BinaryParams) -> Array1<f64> {
        params.to_flat()
    }

    fn prior_probabilities(&self, params: &BinaryParams) -> JointResult<Array1<f64>> {
        let p = params.equilibrium();
        Ok(array![p, 1.0 - p])
    }

    fn transition_probability_matrix(
        &self, params: &BinaryParams, t: f64,
    ) -> JointResult<Array2<f64>> {
        if !t.is_finite() || t < 0.0 {
            return Err(JointError::InvalidBranchLength { value: t });
        }
        if t == 0.0 {
            return Ok(Array2::eye(BINARY_STATE_COUNT));
        }
        let p = params.equilibrium();
        let decay = (-params.lambda() * t).exp();
        let pi = [p, 1.0 - p];
        Ok(Array2::from_shape_fn((BINARY_STATE_COUNT, BINARY_STATE_COUNT), |(i, j)| {
            let identity = if i == j { 1.0 } else { 0.0 };
            pi[j] + decay * (identity - pi[j])
        }))
    }

    fn header_string(&self, suffix: &str) -> String {
        BINARY_HEADER_LABELS.map(|label| format!("{label}{suffix}")).join("\t")
    }

    fn value_string(&self, params: &BinaryParams) -> String {
        format!("{}\t{}", params.lambda(), params.equilibrium())
    }
}
