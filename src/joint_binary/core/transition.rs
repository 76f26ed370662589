//! Four-state continuous-time transition probabilities.
//!
//! The generic solver takes eight directed rates in the fixed move order
//! `0→1, 0→2, 1→0, 1→3, 2→0, 2→3, 3→1, 3→2` (every single-character move of
//! the joint state, sorted by source then target), builds the generator `Q`
//! with `Q[i][i] = -Σ_{j≠i} Q[i][j]`, and returns `P(t) = exp(Q·t)` computed
//! by `nalgebra`'s Padé matrix exponential.
//!
//! `P(t)` is row-stochastic for every `t >= 0` and exactly the identity at
//! `t = 0`. No state is kept between calls.
use nalgebra::Matrix4;
use ndarray::Array2;

use crate::joint_binary::{
    core::{
        options::RateOptions,
        params::JointHlaParams,
        rates::{RateSet, build_rates},
        state::JOINT_STATE_COUNT,
    },
    errors::{JointError, JointResult},
};

/// `(source, target)` of rates `a..h`.
pub const MOVES: [(usize, usize); 8] =
    [(0, 1), (0, 2), (1, 0), (1, 3), (2, 0), (2, 3), (3, 1), (3, 2)];

/// Rate generator `Q` for the given directed rates.
///
/// # Errors
/// [`JointError::InvalidRate`] for a negative or non-finite rate.
pub fn rate_generator(rates: &RateSet) -> JointResult<Matrix4<f64>> {
    let mut q = Matrix4::<f64>::zeros();
    for (index, (&(from, to), value)) in MOVES.iter().zip(rates.as_array()).enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(JointError::InvalidRate { index, value });
        }
        q[(from, to)] = value;
        q[(from, from)] -= value;
    }
    Ok(q)
}

/// `exp(Q·t)` as an `nalgebra` matrix.
///
/// # Errors
/// - [`JointError::InvalidBranchLength`] unless `t` is finite and `>= 0`.
/// - [`JointError::InvalidRate`] from [`rate_generator`].
pub fn transition_matrix4(rates: &RateSet, t: f64) -> JointResult<Matrix4<f64>> {
    if !t.is_finite() || t < 0.0 {
        return Err(JointError::InvalidBranchLength { value: t });
    }
    let q = rate_generator(rates)?;
    if t == 0.0 {
        return Ok(Matrix4::identity());
    }
    // Round-off can leave entries a few ulps below zero.
    Ok((q * t).exp().map(|x| x.max(0.0)))
}

/// Row-stochastic 4×4 transition matrix for `rates` over elapsed time `t`.
pub fn transition_matrix(rates: &RateSet, t: f64) -> JointResult<Array2<f64>> {
    let p = transition_matrix4(rates, t)?;
    Ok(Array2::from_shape_fn((JOINT_STATE_COUNT, JOINT_STATE_COUNT), |(i, j)| p[(i, j)]))
}

/// Parameters → rates → `P(t)`.
pub fn transition_probability_matrix(
    params: &JointHlaParams, opts: &RateOptions, t: f64,
) -> JointResult<Array2<f64>> {
    transition_matrix(&build_rates(params, opts), t)
}
