//! Joint-model options — configuration for rate construction and the
//! stationary solve.
//!
//! Purpose
//! -------
//! Collect every behavioral switch of the joint AA/HLA model in explicit,
//! validated option structs so no computation depends on hidden state such
//! as the wall clock.
//!
//! Key behaviors
//! -------------
//! - [`RateOptions`] carries the opt-in `force_symmetric_aa_rates` switch,
//!   which replaces `RTimesLambdaA` by `ETimesLambdaA` before the rates are
//!   built.
//! - [`StationaryOptions`] makes the eigenvalue tolerance and the iteration
//!   budget of the eigen-decomposition explicit. The tie-break among
//!   eigenvalues within tolerance is always "first in solver order".
//! - [`JointHlaOptions`] bundles both for a model instance.
//!
//! Invariants & assumptions
//! ------------------------
//! - `StationaryOptions::eps` is finite and `> 0`; `max_iter` is passed to
//!   the decomposition routines, where `0` means "no limit".
//! - All options are plain `Copy` data; models own their copy.
use crate::joint_binary::errors::{JointError, JointResult};

/// Eigenvalue distance from 1 accepted as "stationary".
pub const DEFAULT_EIGEN_EPS: f64 = 1e-4;

/// Iteration budget of the Schur / SVD routines.
pub const DEFAULT_EIGEN_MAX_ITER: usize = 10_000;

/// Rate construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateOptions {
    /// Use `ETimesLambdaA` for both AA rate scalings. Off by default.
    pub force_symmetric_aa_rates: bool,
}

impl RateOptions {
    pub fn new(force_symmetric_aa_rates: bool) -> Self {
        RateOptions { force_symmetric_aa_rates }
    }
}

/// Stationary-distribution solver options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryOptions {
    pub eps: f64,
    pub max_iter: usize,
}

impl StationaryOptions {
    /// # Errors
    /// [`JointError::InvalidTolerance`] unless `eps` is finite and `> 0`.
    pub fn new(eps: f64, max_iter: usize) -> JointResult<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(JointError::InvalidTolerance { value: eps });
        }
        Ok(StationaryOptions { eps, max_iter })
    }
}

impl Default for StationaryOptions {
    fn default() -> Self {
        StationaryOptions { eps: DEFAULT_EIGEN_EPS, max_iter: DEFAULT_EIGEN_MAX_ITER }
    }
}

/// Full configuration of a [`JointBinaryHlaModel`](crate::joint_binary::models::joint_hla::JointBinaryHlaModel).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointHlaOptions {
    pub rates: RateOptions,
    pub stationary: StationaryOptions,
}

impl JointHlaOptions {
    pub fn new(rates: RateOptions, stationary: StationaryOptions) -> Self {
        JointHlaOptions { rates, stationary }
    }
}
