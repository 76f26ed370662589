//! Capability set shared by discrete-state substitution models.
//!
//! A likelihood engine needs the same handful of operations from every
//! per-character model: a prior over states, a transition matrix for a branch
//! length, a parameter set it can seed and read back, a flat-vector view of
//! that set, and text columns for logging. [`DiscreteDistribution`] names
//! them so the engine can be generic over the concrete model.
use ndarray::{Array1, Array2};

use crate::joint_binary::errors::JointResult;

pub trait DiscreteDistribution {
    /// Named, bound-checked parameter set of the model.
    type Params: Clone;

    /// Stable identifier of the model family.
    fn type_name(&self) -> &'static str;

    /// Number of states; the side length of every transition matrix.
    fn state_count(&self) -> usize;

    /// Stored initial parameters, or the model's defaults when none are stored.
    fn parameters(&self) -> Self::Params;

    /// Overwrite the stored initial parameters.
    fn set_initial_params(&mut self, params: Self::Params);

    /// Parse a flat vector in the model's print order.
    fn parameters_from_flat(&self, values: &[f64]) -> JointResult<Self::Params>;

    /// Flat vector in the model's print order.
    fn to_flat(&self, params: &Self::Params) -> Array1<f64>;

    fn prior_probabilities(&self, params: &Self::Params) -> JointResult<Array1<f64>>;

    fn transition_probability_matrix(
        &self, params: &Self::Params, t: f64,
    ) -> JointResult<Array2<f64>>;

    fn header_string(&self, suffix: &str) -> String;

    fn value_string(&self, params: &Self::Params) -> String;
}
