//! Errors for the joint binary AA/HLA model and its single-character
//! companion model.
//!
//! [`JointError`] has exactly one numerical failure that originates here,
//! [`JointError::NotComputable`], raised when the stationary prior cannot be
//! extracted. Every other variant is an invalid-argument error: a caller
//! handed in a flat vector of the wrong length, an out-of-bound parameter
//! value, a negative branch length, or similar. Nothing is swallowed or
//! retried; the likelihood engine or optimizer calling the model decides
//! what to do.
//!
//! ## Conventions
//! - Indices are 0-based.
//! - Parameter names in messages are the field names of
//!   `ParameterIndex::name` (`P_AA`, `RTimesLambdaA`, `Lambda_Hla`, ...).
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for joint-model operations.
pub type JointResult<T> = Result<T, JointError>;

#[derive(Debug, Clone, PartialEq)]
pub enum JointError {
    // ---- Numerical ----
    /// Stationary distribution could not be extracted; `cause` carries the
    /// underlying reason (decomposition failure, no eigenvalue near 1, ...).
    NotComputable { cause: String },

    // ---- Parameter bounds ----
    /// Probability-typed parameter outside `[0, 1]` or non-finite.
    InvalidProbability { name: &'static str, value: f64 },

    /// Factor-typed parameter negative or non-finite.
    InvalidFactor { name: &'static str, value: f64 },

    /// Flat / unconstrained parameter vector has the wrong length.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Unconstrained optimizer input must be finite.
    InvalidThetaInput { index: usize, value: f64 },

    // ---- Transition inputs ----
    /// Elapsed time must be finite and `>= 0`.
    InvalidBranchLength { value: f64 },

    /// Directed rate (`a..h`, by position) must be finite and `>= 0`.
    InvalidRate { index: usize, value: f64 },

    /// Joint-state index outside `0..4`, or binary state outside `0..2`.
    InvalidStateIndex { index: usize },

    // ---- Configuration ----
    /// Eigenvalue tolerance must be finite and `> 0`.
    InvalidTolerance { value: f64 },
}

impl JointError {
    /// `true` for caller contract violations, `false` for the numerical
    /// failure.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, JointError::NotComputable { .. })
    }
}

impl std::error::Error for JointError {}

impl std::fmt::Display for JointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Numerical ----
            JointError::NotComputable { cause } => {
                write!(f, "Problem computing the prior: {cause}")
            }

            // ---- Parameter bounds ----
            JointError::InvalidProbability { name, value } => {
                write!(f, "Invalid probability {name} = {value}: must lie in [0, 1]")
            }
            JointError::InvalidFactor { name, value } => {
                write!(f, "Invalid factor {name} = {value}: must be finite and non-negative")
            }
            JointError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, actual {actual}")
            }
            JointError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }

            // ---- Transition inputs ----
            JointError::InvalidBranchLength { value } => {
                write!(f, "Invalid branch length {value}: must be finite and >= 0")
            }
            JointError::InvalidRate { index, value } => {
                write!(f, "Invalid rate at position {index}: {value}, must be finite and >= 0")
            }
            JointError::InvalidStateIndex { index } => {
                write!(f, "Invalid state index {index}")
            }

            // ---- Configuration ----
            JointError::InvalidTolerance { value } => {
                write!(f, "Invalid eigenvalue tolerance {value}: must be finite and > 0")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<JointError> for PyErr {
    fn from(err: JointError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
