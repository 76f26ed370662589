//! Directed rates of the joint AA/HLA chain.
//!
//! Each rate is a transition magnitude scaled by an equilibrium frequency of
//! the character that changes: AA changes scale with `ETimesLambdaA`
//! (hla = 0) or `RTimesLambdaA` (hla = 1) weighted by the AA equilibrium
//! probabilities, HLA changes scale with `Lambda_Hla` weighted by the HLA
//! equilibrium probabilities.
//!
//! Rates are labelled `a..h` in the move order of
//! [`transition_matrix`](super::transition::transition_matrix):
//!
//! | rate | move  | character |
//! |------|-------|-----------|
//! | a    | 0 → 1 | AA        |
//! | b    | 0 → 2 | HLA       |
//! | c    | 1 → 0 | AA        |
//! | d    | 1 → 3 | HLA       |
//! | e    | 2 → 0 | HLA       |
//! | f    | 2 → 3 | AA        |
//! | g    | 3 → 1 | HLA       |
//! | h    | 3 → 2 | AA        |
use crate::joint_binary::core::{options::RateOptions, params::JointHlaParams};

/// The eight directed rate magnitudes. Recomputed per call, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSet {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
}

impl RateSet {
    /// Rates in `a..h` order.
    pub fn as_array(&self) -> [f64; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }
}

/// Build the rate set from validated parameters. Total: bounded inputs
/// always give finite, non-negative rates.
pub fn build_rates(params: &JointHlaParams, opts: &RateOptions) -> RateSet {
    let lambda_times_e = params.e_times_lambda_a();
    let lambda_times_r = if opts.force_symmetric_aa_rates {
        lambda_times_e
    } else {
        params.r_times_lambda_a()
    };
    let p_aa = params.p_aa();
    let p_hla = params.p_hla();
    let lambda_hla = params.lambda_hla();

    let paa = 1.0 - p_aa;
    let phla = 1.0 - p_hla;

    let hla_to_not_hla = lambda_hla * phla;
    let not_hla_to_hla = lambda_hla * p_hla;

    RateSet {
        a: lambda_times_e * paa,
        b: hla_to_not_hla,
        c: lambda_times_e * p_aa,
        d: hla_to_not_hla,
        e: not_hla_to_hla,
        f: lambda_times_r * paa,
        g: not_hla_to_hla,
        h: lambda_times_r * p_aa,
    }
}
