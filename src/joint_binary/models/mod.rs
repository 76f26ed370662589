//! models — discrete-state substitution models built on the joint core.
//!
//! Purpose
//! -------
//! Expose the model objects a likelihood engine works with: the joint
//! AA/HLA model ([`JointBinaryHlaModel`]), the single binary-character model
//! it is initialized from ([`BinaryModel`]), the shared capability trait
//! ([`DiscreteDistribution`]).
//!
//! Key behaviors
//! -------------
//! - Both models implement [`DiscreteDistribution`].
//! - [`BinaryParams`] implements `IndependentFit`, so independently fitted
//!   single-character parameters can seed
//!   [`JointBinaryHlaModel::init_from_independent_models`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A model's only mutable state is its stored start point; every other
//!   operation is a pure function of a parameter value.

pub mod binary;
pub mod distribution;
pub mod joint_hla;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binary::{BinaryModel, BinaryParams};
pub use self::distribution::DiscreteDistribution;
pub use self::joint_hla::JointBinaryHlaModel;
