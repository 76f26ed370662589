//! Joint binary AA/HLA model.
//!
//! Wires the joint-state core (rates, transition solver, stationary solver,
//! parameter mapping, reporting) into a model object that a phylogenetic
//! likelihood engine can drive through [`DiscreteDistribution`].
//!
//! Key ideas:
//! - The model owns a single mutable slot, the stored initial parameters.
//!   Everything else is computed on demand from a parameter value.
//! - Without stored parameters the start point is `P_Hla = 0.1`,
//!   `P_AA` = empirical AA equilibrium, `ETimesLambdaA = Lambda_Hla = 1`,
//!   `RTimesLambdaA = 0`.
//! - An external optimizer works in the unconstrained θ-space of
//!   [`JointHlaParams::to_theta`]; a θ at which no stationary prior exists
//!   surfaces as `JointError::NotComputable` from `prior_probabilities`.
use ndarray::{Array1, Array2};
use tracing::info;

use crate::joint_binary::{
    core::{
        options::JointHlaOptions,
        params::{IndependentFit, JointHlaParams},
        report,
        state::JOINT_STATE_COUNT,
        stationary, transition,
    },
    errors::JointResult,
    models::distribution::DiscreteDistribution,
};

/// Identifier the likelihood engine uses for this model family.
pub const TYPE_NAME: &str = "Directed";

/// Joint AA/HLA model with an optional stored start point.
///
/// # Notes
/// - Instances share no mutable state, so independent models can be
///   evaluated from different threads.
#[derive(Debug, Clone, PartialEq)]
pub struct JointBinaryHlaModel {
    /// Start point used while no initial parameters are stored.
    fallback: JointHlaParams,
    /// Rate and stationary-solver options.
    pub options: JointHlaOptions,
    initial_params: Option<JointHlaParams>,
}

impl JointBinaryHlaModel {
    /// # Errors
    /// `JointError::InvalidProbability` unless `empirical_aa_equilibrium`
    /// lies in `[0, 1]`.
    pub fn new(empirical_aa_equilibrium: f64, options: JointHlaOptions) -> JointResult<Self> {
        Ok(JointBinaryHlaModel {
            fallback: JointHlaParams::defaults(empirical_aa_equilibrium)?,
            options,
            initial_params: None,
        })
    }

    pub fn empirical_aa_equilibrium(&self) -> f64 {
        self.fallback.p_aa()
    }

    /// Stored initial parameters if present, otherwise the documented
    /// defaults.
    pub fn default_parameters(&self) -> JointHlaParams {
        self.initial_params.as_ref().unwrap_or(&self.fallback).clone()
    }

    pub fn initial_params(&self) -> Option<&JointHlaParams> {
        self.initial_params.as_ref()
    }

    /// Seed the stored initial parameters from two independently fitted
    /// single-character models: `P_Hla` and `Lambda_Hla` from `hla`, `P_AA`
    /// from `aa`, and both AA rate scalings from `aa`'s rate.
    ///
    /// # Errors
    /// Bound errors if either fit reports an out-of-range value; the stored
    /// slot is left unchanged in that case.
    pub fn init_from_independent_models<H, A>(&mut self, hla: &H, aa: &A) -> JointResult<()>
    where
        H: IndependentFit + ?Sized,
        A: IndependentFit + ?Sized,
    {
        let params = JointHlaParams::from_independent(hla, aa)?;
        info!(
            p_hla = params.p_hla(),
            p_aa = params.p_aa(),
            lambda_hla = params.lambda_hla(),
            lambda_aa = params.e_times_lambda_a(),
            "initial parameters seeded from independent fits"
        );
        self.initial_params = Some(params);
        Ok(())
    }
}

impl DiscreteDistribution for JointBinaryHlaModel {
    type Params = JointHlaParams;

    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn state_count(&self) -> usize {
        JOINT_STATE_COUNT
    }

    fn parameters(&self) -> JointHlaParams {
        self.default_parameters()
    }

    fn set_initial_params(&mut self, params: JointHlaParams) {
        self.initial_params = Some(params);
    }

    fn parameters_from_flat(&self, values: &[f64]) -> JointResult<JointHlaParams> {
        JointHlaParams::from_flat(values)
    }

    fn to_flat(&self, params: &JointHlaParams) -> Array1<f64> {
        params.to_flat()
    }

    fn prior_probabilities(&self, params: &JointHlaParams) -> JointResult<Array1<f64>> {
        stationary::prior_probabilities(params, &self.options.rates, &self.options.stationary)
    }

    fn transition_probability_matrix(
        &self, params: &JointHlaParams, t: f64,
    ) -> JointResult<Array2<f64>> {
        transition::transition_probability_matrix(params, &self.options.rates, t)
    }

    fn header_string(&self, suffix: &str) -> String {
        report::header_string(suffix)
    }

    fn value_string(&self, params: &JointHlaParams) -> String {
        report::value_string(params)
    }
}
