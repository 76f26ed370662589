//! joint_binary — joint evolution of an amino-acid and an HLA character.
//!
//! Purpose
//! -------
//! Model two binary characters, an amino-acid state and a binary HLA-linked
//! covariate, as one continuous-time Markov chain over four joint states, as
//! a submodel of a phylogenetic likelihood framework.
//!
//! Key behaviors
//! -------------
//! - Build the 4-state rate generator from five named parameters
//!   (`P_AA`, `P_Hla`, `RTimesLambdaA`, `ETimesLambdaA`, `Lambda_Hla`).
//! - Compute transition matrices `P(t) = exp(Q·t)` and the stationary prior
//!   (left eigenvector of `P(1)` for eigenvalue 1).
//! - Map between the named parameters, the flat vector in print order, and
//!   the unconstrained optimizer vector.
//! - Render fixed-order header and value lines for external logs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters satisfy their bounds at all times; rate construction is
//!   therefore total.
//! - The only numerical error originating here is
//!   [`JointError::NotComputable`]; all other errors are invalid arguments.
//!
//! Conventions
//! -----------
//! - Joint state index `2·hla + aa`; value 0 of each character is the state
//!   whose equilibrium frequency is `P_Hla` / `P_AA`.
//! - Flat vectors use `[ETimesLambdaA, RTimesLambdaA, Lambda_Hla, P_AA, P_Hla]`.
//!
//! Downstream usage
//! ----------------
//! - A likelihood engine holds a [`JointBinaryHlaModel`], seeds it with
//!   [`JointBinaryHlaModel::init_from_independent_models`], and calls
//!   `prior_probabilities` / `transition_probability_matrix` through
//!   [`DiscreteDistribution`].

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    JointHlaOptions, JointHlaParams, JointState, ParameterIndex, RateOptions, RateSet,
    StationaryOptions,
};
pub use self::errors::{JointError, JointResult};
pub use self::models::{BinaryModel, BinaryParams, DiscreteDistribution, JointBinaryHlaModel};
