//! Named parameters of the joint AA/HLA model and their flat-vector forms.
//!
//! The model has five bound-typed scalars:
//!
//! | index | name            | kind        | meaning                                  |
//! |-------|-----------------|-------------|------------------------------------------|
//! | 0     | `P_AA`          | probability | AA equilibrium frequency (state 0)       |
//! | 1     | `P_Hla`         | probability | HLA equilibrium frequency (state 0)      |
//! | 2     | `RTimesLambdaA` | factor      | AA rate scaling while hla = 1            |
//! | 3     | `ETimesLambdaA` | factor      | AA rate scaling while hla = 0            |
//! | 4     | `Lambda_Hla`    | factor      | HLA rate scaling                         |
//!
//! The *index* order is the stable integer key of each parameter. The flat
//! vector exchanged with optimizers and reporters uses the *print* order
//! `[ETimesLambdaA, RTimesLambdaA, Lambda_Hla, P_AA, P_Hla]`.
//!
//! `ETimesLambdaA` and `RTimesLambdaA` are structurally symmetric but kept as
//! two independent fields; only initialization from independent fits sets
//! them equal.
use ndarray::Array1;

use crate::joint_binary::{
    core::bounds::{BoundKind, BoundedParam},
    errors::{JointError, JointResult},
};

/// Number of free parameters.
pub const PARAM_COUNT: usize = 5;

/// `P_Hla` used when no initial values are stored.
pub const DEFAULT_P_HLA: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterIndex {
    PAa = 0,
    PHla = 1,
    RTimesLambdaA = 2,
    ETimesLambdaA = 3,
    LambdaHla = 4,
}

impl ParameterIndex {
    /// Index order.
    pub const ALL: [ParameterIndex; PARAM_COUNT] = [
        ParameterIndex::PAa,
        ParameterIndex::PHla,
        ParameterIndex::RTimesLambdaA,
        ParameterIndex::ETimesLambdaA,
        ParameterIndex::LambdaHla,
    ];

    /// Flat-vector / report order.
    pub const PRINT_ORDER: [ParameterIndex; PARAM_COUNT] = [
        ParameterIndex::ETimesLambdaA,
        ParameterIndex::RTimesLambdaA,
        ParameterIndex::LambdaHla,
        ParameterIndex::PAa,
        ParameterIndex::PHla,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParameterIndex::PAa => "P_AA",
            ParameterIndex::PHla => "P_Hla",
            ParameterIndex::RTimesLambdaA => "RTimesLambdaA",
            ParameterIndex::ETimesLambdaA => "ETimesLambdaA",
            ParameterIndex::LambdaHla => "Lambda_Hla",
        }
    }

    pub fn kind(self) -> BoundKind {
        match self {
            ParameterIndex::PAa | ParameterIndex::PHla => BoundKind::Probability,
            _ => BoundKind::PositiveFactor,
        }
    }
}

/// A fitted single binary-character model as seen by the joint model's
/// initializer: an equilibrium probability and a rate scalar.
pub trait IndependentFit {
    fn equilibrium(&self) -> f64;
    fn rate(&self) -> f64;
}

/// The five named parameters, stored in index order.
///
/// Every instance satisfies the bounds of its fields; all constructors and
/// setters validate.
#[derive(Debug, Clone, PartialEq)]
pub struct JointHlaParams {
    params: [BoundedParam; PARAM_COUNT],
}

impl JointHlaParams {
    /// # Errors
    /// [`JointError::InvalidProbability`] / [`JointError::InvalidFactor`] for
    /// the first out-of-bound field, checked in index order.
    pub fn new(
        p_aa: f64, p_hla: f64, r_times_lambda_a: f64, e_times_lambda_a: f64, lambda_hla: f64,
    ) -> JointResult<Self> {
        let bounded = |idx: ParameterIndex, value: f64| BoundedParam::new(idx.name(), idx.kind(), value);
        Ok(JointHlaParams {
            params: [
                bounded(ParameterIndex::PAa, p_aa)?,
                bounded(ParameterIndex::PHla, p_hla)?,
                bounded(ParameterIndex::RTimesLambdaA, r_times_lambda_a)?,
                bounded(ParameterIndex::ETimesLambdaA, e_times_lambda_a)?,
                bounded(ParameterIndex::LambdaHla, lambda_hla)?,
            ],
        })
    }

    /// Start values without any stored fit: `P_Hla = 0.1`, `P_AA` = the
    /// empirical AA equilibrium, `ETimesLambdaA = Lambda_Hla = 1`,
    /// `RTimesLambdaA = 0`.
    pub fn defaults(empirical_aa_equilibrium: f64) -> JointResult<Self> {
        Self::new(empirical_aa_equilibrium, DEFAULT_P_HLA, 0.0, 1.0, 1.0)
    }

    /// Start values from two independently fitted single-character models.
    ///
    /// Assumes independence of the two characters and treats both AA rate
    /// scalings alike, since only one marginal AA rate is observable.
    pub fn from_independent<H, A>(hla: &H, aa: &A) -> JointResult<Self>
    where
        H: IndependentFit + ?Sized,
        A: IndependentFit + ?Sized,
    {
        Self::new(aa.equilibrium(), hla.equilibrium(), aa.rate(), aa.rate(), hla.rate())
    }

    /// Parse a flat vector in print order
    /// `[ETimesLambdaA, RTimesLambdaA, Lambda_Hla, P_AA, P_Hla]`.
    ///
    /// # Errors
    /// - [`JointError::ThetaLengthMismatch`] unless `values.len() == 5`.
    /// - Bound errors for out-of-range entries.
    pub fn from_flat(values: &[f64]) -> JointResult<Self> {
        if values.len() != PARAM_COUNT {
            return Err(JointError::ThetaLengthMismatch {
                expected: PARAM_COUNT,
                actual: values.len(),
            });
        }
        let mut out = Self::defaults(0.5)?;
        for (idx, &value) in ParameterIndex::PRINT_ORDER.iter().zip(values) {
            out.set(*idx, value)?;
        }
        Ok(out)
    }

    /// Inverse of [`from_flat`](Self::from_flat).
    pub fn to_flat(&self) -> Array1<f64> {
        ParameterIndex::PRINT_ORDER.iter().map(|&idx| self.get(idx)).collect()
    }

    /// Map to the unconstrained optimizer vector, print order.
    pub fn to_theta(&self) -> Array1<f64> {
        ParameterIndex::PRINT_ORDER
            .iter()
            .map(|&idx| self.params[idx as usize].to_unconstrained())
            .collect()
    }

    /// Map an unconstrained optimizer vector (print order) back to bounded
    /// parameters.
    ///
    /// # Errors
    /// - [`JointError::ThetaLengthMismatch`] unless `theta.len() == 5`.
    /// - [`JointError::InvalidThetaInput`] for non-finite coordinates.
    pub fn from_theta(theta: &Array1<f64>) -> JointResult<Self> {
        if theta.len() != PARAM_COUNT {
            return Err(JointError::ThetaLengthMismatch {
                expected: PARAM_COUNT,
                actual: theta.len(),
            });
        }
        let mut out = Self::defaults(0.5)?;
        for (position, (&idx, &t)) in ParameterIndex::PRINT_ORDER.iter().zip(theta).enumerate() {
            out.params[idx as usize].set_from_unconstrained(position, t)?;
        }
        Ok(out)
    }

    pub fn get(&self, idx: ParameterIndex) -> f64 {
        self.params[idx as usize].value()
    }

    /// Whole-field assignment with bound validation.
    pub fn set(&mut self, idx: ParameterIndex, value: f64) -> JointResult<()> {
        self.params[idx as usize].set(value)
    }

    /// Parameters in index order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundedParam> {
        self.params.iter()
    }

    pub fn p_aa(&self) -> f64 {
        self.get(ParameterIndex::PAa)
    }

    pub fn p_hla(&self) -> f64 {
        self.get(ParameterIndex::PHla)
    }

    pub fn r_times_lambda_a(&self) -> f64 {
        self.get(ParameterIndex::RTimesLambdaA)
    }

    pub fn e_times_lambda_a(&self) -> f64 {
        self.get(ParameterIndex::ETimesLambdaA)
    }

    pub fn lambda_hla(&self) -> f64 {
        self.get(ParameterIndex::LambdaHla)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    struct Fit {
        equilibrium: f64,
        rate: f64,
    }

    impl IndependentFit for Fit {
        fn equilibrium(&self) -> f64 {
            self.equilibrium
        }
        fn rate(&self) -> f64 {
            self.rate
        }
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Default construction and independent-model initialization values.
    // - The print-order flat-vector contract and its length check.
    // - The unconstrained θ mapping.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Defaults follow the documented start values.
    //
    // Given
    // -----
    // - Empirical AA equilibrium 0.4.
    //
    // Expect
    // ------
    // - P_Hla = 0.1, P_AA = 0.4, E = Lambda_Hla = 1, R = 0.
    fn defaults_use_documented_start_values() {
        let p = JointHlaParams::defaults(0.4).expect("defaults are in bounds");
        assert_eq!(p.p_hla(), 0.1);
        assert_eq!(p.p_aa(), 0.4);
        assert_eq!(p.e_times_lambda_a(), 1.0);
        assert_eq!(p.lambda_hla(), 1.0);
        assert_eq!(p.r_times_lambda_a(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Independent-model initialization copies equilibria and rates.
    //
    // Given
    // -----
    // - HLA fit (0.3, 2.0), AA fit (0.7, 1.5).
    //
    // Expect
    // ------
    // - P_Hla = 0.3, P_AA = 0.7, Lambda_Hla = 2.0, E = R = 1.5.
    fn from_independent_copies_marginal_fits() {
        let hla = Fit { equilibrium: 0.3, rate: 2.0 };
        let aa = Fit { equilibrium: 0.7, rate: 1.5 };
        let p = JointHlaParams::from_independent(&hla, &aa).unwrap();
        assert_eq!(p.p_hla(), 0.3);
        assert_eq!(p.p_aa(), 0.7);
        assert_eq!(p.lambda_hla(), 2.0);
        assert_eq!(p.e_times_lambda_a(), 1.5);
        assert_eq!(p.r_times_lambda_a(), 1.5);
    }

    #[test]
    // Purpose
    // -------
    // The flat vector follows print order and round-trips exactly.
    //
    // Given
    // -----
    // - v = [E, R, Lambda_Hla, P_AA, P_Hla] = [1.2, 0.3, 2.5, 0.6, 0.05].
    //
    // Expect
    // ------
    // - Named getters read the right slots; `to_flat(from_flat(v)) == v`.
    fn flat_vector_round_trips_in_print_order() {
        let v = [1.2, 0.3, 2.5, 0.6, 0.05];
        let p = JointHlaParams::from_flat(&v).unwrap();
        assert_eq!(p.e_times_lambda_a(), 1.2);
        assert_eq!(p.r_times_lambda_a(), 0.3);
        assert_eq!(p.lambda_hla(), 2.5);
        assert_eq!(p.p_aa(), 0.6);
        assert_eq!(p.p_hla(), 0.05);
        assert_eq!(p.to_flat(), array![1.2, 0.3, 2.5, 0.6, 0.05]);
    }

    #[test]
    // Purpose
    // -------
    // Wrong lengths and out-of-bound values are rejected.
    //
    // Given
    // -----
    // - A 4-element vector; a vector with P_AA = 1.5; one with R = -0.1.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch`, `InvalidProbability`, `InvalidFactor`.
    fn from_flat_rejects_bad_input() {
        assert_eq!(
            JointHlaParams::from_flat(&[1.0, 1.0, 1.0, 0.5]),
            Err(JointError::ThetaLengthMismatch { expected: 5, actual: 4 })
        );
        assert_eq!(
            JointHlaParams::from_flat(&[1.0, 1.0, 1.0, 1.5, 0.5]),
            Err(JointError::InvalidProbability { name: "P_AA", value: 1.5 })
        );
        assert_eq!(
            JointHlaParams::from_flat(&[1.0, -0.1, 1.0, 0.5, 0.5]),
            Err(JointError::InvalidFactor { name: "RTimesLambdaA", value: -0.1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // θ mapping round-trips interior parameter values.
    //
    // Given
    // -----
    // - Interior parameters.
    //
    // Expect
    // ------
    // - `from_theta(to_theta(p)) ≈ p`, and a short θ is rejected.
    fn theta_mapping_round_trips() {
        let p = JointHlaParams::new(0.35, 0.2, 0.8, 1.7, 0.9).unwrap();
        let back = JointHlaParams::from_theta(&p.to_theta()).unwrap();
        for (a, b) in p.iter().zip(back.iter()) {
            assert_relative_eq!(a.value(), b.value(), epsilon = 1e-12);
        }
        assert!(matches!(
            JointHlaParams::from_theta(&array![0.0, 1.0]),
            Err(JointError::ThetaLengthMismatch { expected: 5, actual: 2 })
        ));
    }
}
