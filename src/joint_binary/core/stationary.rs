//! Stationary (prior) distribution of a transition matrix.
//!
//! Purpose
//! -------
//! Recover the equilibrium state distribution of the joint chain as the left
//! eigenvector of `P(1)` for eigenvalue 1, i.e. the right eigenvector of
//! `P(1)ᵀ`.
//!
//! Key behaviors
//! -------------
//! - Eigenvalues come from `nalgebra`'s real Schur form of `Pᵀ` and are
//!   scanned in the order the decomposition returns them. The **first**
//!   eigenvalue with `|λ − 1| ≤ eps` (complex modulus) is selected.
//! - The eigenvector is the right-singular vector of `Pᵀ − I` with the
//!   smallest singular value (its numerical null vector). The selected λ is
//!   within `eps` of 1, so this is its eigenvector, and the vector belongs to
//!   λ = 1 exactly even when a slow mode also lies within `eps`.
//! - Components are reduced to magnitudes and normalized to sum 1.
//!
//! Invariants & assumptions
//! ------------------------
//! - A returned prior has non-negative entries summing to 1.
//! - Every failure (non-square or non-finite input, decomposition that does
//!   not converge, no eigenvalue within tolerance, degenerate eigenvector) is
//!   reported as [`JointError::NotComputable`] with the cause attached. No
//!   partial or zero-filled vector is ever returned.
//!
//! Conventions
//! -----------
//! - Works on any square matrix so the binary and joint models share it.
//! - Iteration budgets and tolerance come from [`StationaryOptions`].
use nalgebra::{Complex, DMatrix, Schur, SVD};
use ndarray::{Array1, Array2};
use tracing::{debug, warn};

use crate::joint_binary::{
    core::{
        options::{RateOptions, StationaryOptions},
        params::JointHlaParams,
        transition::transition_probability_matrix,
    },
    errors::{JointError, JointResult},
};

/// Branch length at which the stationary eigenvector is extracted.
pub const STATIONARY_STEP_TIME: f64 = 1.0;

/// Stationary distribution of the row-stochastic matrix `p`.
///
/// # Errors
/// [`JointError::NotComputable`] on any failure; see the module docs.
pub fn stationary_from_transition(
    p: &Array2<f64>, opts: &StationaryOptions,
) -> JointResult<Array1<f64>> {
    stationary_inner(p, opts).inspect_err(|err| warn!(error = %err, "stationary solve failed"))
}

fn stationary_inner(p: &Array2<f64>, opts: &StationaryOptions) -> JointResult<Array1<f64>> {
    let n = p.nrows();
    if n == 0 || p.ncols() != n {
        return Err(not_computable(format!("expected a non-empty square matrix, got {:?}", p.dim())));
    }
    if p.iter().any(|x| !x.is_finite()) {
        return Err(not_computable("transition matrix has non-finite entries"));
    }

    // Pᵀ: right eigenvectors of the transpose are left eigenvectors of P.
    let pt = DMatrix::from_fn(n, n, |i, j| p[[j, i]]);

    let schur = Schur::try_new(pt.clone(), f64::EPSILON, opts.max_iter)
        .ok_or_else(|| not_computable("Schur decomposition did not converge"))?;
    let eigenvalues = schur.complex_eigenvalues();
    let (index, lambda) =
        select_unit_eigenvalue(eigenvalues.as_slice(), opts.eps).ok_or_else(|| {
            not_computable(format!(
                "no eigenvalue within {} of 1 (eigenvalues: {:?})",
                opts.eps,
                eigenvalues.as_slice()
            ))
        })?;
    debug!(index, re = lambda.re, im = lambda.im, "selected stationary eigenvalue");

    let shifted = pt - DMatrix::<f64>::identity(n, n);
    let svd = SVD::try_new(shifted, false, true, f64::EPSILON, opts.max_iter)
        .ok_or_else(|| not_computable("SVD of the shifted matrix did not converge"))?;
    let v_t = svd.v_t.ok_or_else(|| not_computable("SVD returned no right-singular vectors"))?;
    let (null_row, _) = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .ok_or_else(|| not_computable("SVD returned no singular values"))?;

    let magnitudes: Array1<f64> = v_t.row(null_row).iter().map(|x| x.abs()).collect();
    let total = magnitudes.sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(not_computable(format!("degenerate eigenvector (sum {total})")));
    }
    Ok(magnitudes / total)
}

/// First eigenvalue, in the given order, with `|λ − 1| ≤ eps`.
pub fn select_unit_eigenvalue(
    eigenvalues: &[Complex<f64>], eps: f64,
) -> Option<(usize, Complex<f64>)> {
    let one = Complex::new(1.0, 0.0);
    eigenvalues.iter().copied().enumerate().find(|(_, lambda)| (lambda - one).norm() <= eps)
}

/// Prior of the joint chain: `P(1)` from the parameters, then its
/// stationary distribution.
pub fn prior_probabilities(
    params: &JointHlaParams, rate_opts: &RateOptions, stat_opts: &StationaryOptions,
) -> JointResult<Array1<f64>> {
    let p = transition_probability_matrix(params, rate_opts, STATIONARY_STEP_TIME)?;
    stationary_from_transition(&p, stat_opts)
}

fn not_computable(cause: impl Into<String>) -> JointError {
    JointError::NotComputable { cause: cause.into() }
}
