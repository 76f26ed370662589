//! Bound-typed scalar parameters.
//!
//! Every named model parameter is either a probability (`[0, 1]`) or a
//! non-negative rate factor. [`BoundedParam`] enforces the bound at
//! construction and on every assignment, and maps the value to and from the
//! unconstrained real line the optimizer works on:
//!
//! | kind         | model → θ                | θ → model          |
//! |--------------|--------------------------|--------------------|
//! | probability  | `safe_logit(p)`          | `safe_logistic(θ)` |
//! | factor       | `safe_softplus_inv(x)`   | `safe_softplus(θ)` |
//!
//! The inverse maps clamp their argument by [`BOUND_EPS`] so values on a
//! bound (`p = 0`, `p = 1`, factor `0`) still map to a finite θ.
use crate::joint_binary::errors::{JointError, JointResult};

/// Clamp applied before `logit` and `softplus⁻¹`.
pub const BOUND_EPS: f64 = 1e-10;

/// `ln(1 + eˣ)`, linear above 20 to avoid overflow.
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp().ln_1p() }
}

/// Inverse of [`safe_softplus`] on `[BOUND_EPS, ∞)`.
pub fn safe_softplus_inv(x: f64) -> f64 {
    let x = x.max(BOUND_EPS);
    if x > 20.0 { x } else { x.exp_m1().ln() }
}

/// `1 / (1 + e⁻ˣ)` evaluated without overflow for either sign.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// `ln(p / (1 − p))` with `p` clamped to `[BOUND_EPS, 1 − BOUND_EPS]`.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(BOUND_EPS, 1.0 - BOUND_EPS);
    p.ln() - (-p).ln_1p()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// Closed interval `[0, 1]`.
    Probability,
    /// Finite and `>= 0`.
    PositiveFactor,
}

impl BoundKind {
    /// Check `value` against this bound, naming the parameter in the error.
    ///
    /// # Errors
    /// - [`JointError::InvalidProbability`] for probabilities outside `[0, 1]`
    ///   or NaN.
    /// - [`JointError::InvalidFactor`] for negative or non-finite factors.
    pub fn validate(self, name: &'static str, value: f64) -> JointResult<()> {
        match self {
            BoundKind::Probability => {
                if !(0.0..=1.0).contains(&value) {
                    return Err(JointError::InvalidProbability { name, value });
                }
            }
            BoundKind::PositiveFactor => {
                if !value.is_finite() || value < 0.0 {
                    return Err(JointError::InvalidFactor { name, value });
                }
            }
        }
        Ok(())
    }

    pub fn to_unconstrained(self, value: f64) -> f64 {
        match self {
            BoundKind::Probability => safe_logit(value),
            BoundKind::PositiveFactor => safe_softplus_inv(value),
        }
    }

    pub fn from_unconstrained(self, theta: f64) -> f64 {
        match self {
            BoundKind::Probability => safe_logistic(theta),
            BoundKind::PositiveFactor => safe_softplus(theta),
        }
    }
}

/// A named scalar whose value always satisfies its [`BoundKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedParam {
    name: &'static str,
    kind: BoundKind,
    value: f64,
}

impl BoundedParam {
    /// # Errors
    /// See [`BoundKind::validate`].
    pub fn new(name: &'static str, kind: BoundKind, value: f64) -> JointResult<Self> {
        kind.validate(name, value)?;
        Ok(BoundedParam { name, kind, value })
    }

    pub fn probability(name: &'static str, value: f64) -> JointResult<Self> {
        Self::new(name, BoundKind::Probability, value)
    }

    pub fn factor(name: &'static str, value: f64) -> JointResult<Self> {
        Self::new(name, BoundKind::PositiveFactor, value)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> BoundKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole-value assignment; the old value is kept on error.
    pub fn set(&mut self, value: f64) -> JointResult<()> {
        self.kind.validate(self.name, value)?;
        self.value = value;
        Ok(())
    }

    pub fn to_unconstrained(&self) -> f64 {
        self.kind.to_unconstrained(self.value)
    }

    /// Assign from an unconstrained optimizer coordinate.
    ///
    /// # Errors
    /// [`JointError::InvalidThetaInput`] (with `index`) if `theta` is not
    /// finite.
    pub fn set_from_unconstrained(&mut self, index: usize, theta: f64) -> JointResult<()> {
        if !theta.is_finite() {
            return Err(JointError::InvalidThetaInput { index, value: theta });
        }
        self.set(self.kind.from_unconstrained(theta))
    }
}
