//! core — joint AA/HLA states, parameters, rates, and the chain solvers.
//!
//! Purpose
//! -------
//! Collect the building blocks of the joint binary AA/HLA substitution
//! model: the four joint states, the five bound-typed parameters and their
//! flat/unconstrained forms, the rate algebra, the 4-state transition solver,
//! the stationary-distribution solver, and fixed-order reporting.
//!
//! Key behaviors
//! -------------
//! - [`build_rates`] turns validated [`JointHlaParams`] into a [`RateSet`].
//! - [`transition_matrix`] computes `P(t) = exp(Q·t)` for any eight directed
//!   rates in the fixed move order; [`transition_probability_matrix`] chains
//!   the two.
//! - [`prior_probabilities`] extracts the stationary distribution of `P(1)`
//!   by eigen-analysis of its transpose.
//! - [`header_string`] / [`value_string`] render parameters as tab-separated
//!   lines in the flat-vector order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every [`JointHlaParams`] satisfies its bounds (probabilities in
//!   `[0, 1]`, factors finite and `>= 0`); rate construction is therefore
//!   total.
//! - Transition matrices are row-stochastic and exactly the identity at
//!   `t = 0`; priors are non-negative and sum to 1, or the call fails with
//!   [`JointError::NotComputable`](crate::joint_binary::errors::JointError).
//!
//! Conventions
//! -----------
//! - State index `2·hla + aa` ([`JointState`]) is the row/column order of
//!   every matrix and vector.
//! - Parameter *index* order is `P_AA, P_Hla, RTimesLambdaA, ETimesLambdaA,
//!   Lambda_Hla`; the flat vector uses the *print* order
//!   `[ETimesLambdaA, RTimesLambdaA, Lambda_Hla, P_AA, P_Hla]`.
//! - Nothing here holds state or performs I/O beyond `tracing` diagnostics.

pub mod bounds;
pub mod options;
pub mod params;
pub mod rates;
pub mod report;
pub mod state;
pub mod stationary;
pub mod transition;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bounds::{BoundKind, BoundedParam};
pub use self::options::{JointHlaOptions, RateOptions, StationaryOptions};
pub use self::params::{IndependentFit, JointHlaParams, PARAM_COUNT, ParameterIndex};
pub use self::rates::{RateSet, build_rates};
pub use self::report::{header_string, parameter_names, value_string};
pub use self::state::{JOINT_STATE_COUNT, JointState};
pub use self::stationary::{prior_probabilities, stationary_from_transition};
pub use self::transition::{transition_matrix, transition_probability_matrix};
