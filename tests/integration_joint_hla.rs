//! Integration tests for the joint binary AA/HLA model.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: parameters → rates → transition
//!   matrices and stationary prior, flat and unconstrained vector mapping,
//!   reporting, and seeding from independent binary models.
//!
//! Coverage
//! --------
//! - `joint_binary::core`: row-stochasticity, identity at t = 0, prior
//!   validity, flat and θ round trips, the not-computable path.
//! - `joint_binary::models`: defaults, `init_from_independent_models`, and
//!   agreement between a seeded joint model and its two `BinaryModel`s.
//!
//! Exclusions
//! ----------
//! - Fine-grained checks of bounds, rates, and option validation (unit tests).
//! - Python bindings.
use approx::assert_relative_eq;
use hla_joint_binary::{
    joint_binary::{
        core::{
            options::{JointHlaOptions, RateOptions, StationaryOptions},
            params::JointHlaParams,
            rates::RateSet,
            report::header_string,
            state::JointState,
            stationary::stationary_from_transition,
            transition::transition_matrix,
        },
        errors::JointError,
        models::{
            binary::{BinaryModel, BinaryParams},
            distribution::DiscreteDistribution,
            joint_hla::JointBinaryHlaModel,
        },
    },
};
use ndarray::Array2;

fn parameter_grid() -> Vec<JointHlaParams> {
    let mut grid = Vec::new();
    for &p_aa in &[0.05, 0.5, 0.93] {
        for &p_hla in &[0.1, 0.6] {
            for &(r, e) in &[(0.0, 1.0), (0.5, 2.0), (3.0, 0.25)] {
                for &lambda_hla in &[0.2, 1.0, 4.0] {
                    grid.push(JointHlaParams::new(p_aa, p_hla, r, e, lambda_hla).unwrap());
                }
            }
        }
    }
    grid
}

#[test]
// Purpose
// -------
// Transition matrices are row-stochastic over a parameter grid and a range
// of branch lengths, and the identity at t = 0.
//
// Given
// -----
// - 54 parameter sets and t ∈ {0, 0.01, 0.5, 1, 3, 20}.
//
// Expect
// ------
// - Every row sums to 1 within 1e-9; P(0) = I.
fn transition_matrices_are_stochastic() {
    let model = JointBinaryHlaModel::new(0.5, JointHlaOptions::default()).unwrap();
    for params in parameter_grid() {
        for &t in &[0.0, 0.01, 0.5, 1.0, 3.0, 20.0] {
            let p = model.transition_probability_matrix(&params, t).unwrap();
            for row in p.rows() {
                assert_relative_eq!(row.sum(), 1.0, epsilon = 1e-9);
            }
            if t == 0.0 {
                assert_eq!(p, Array2::<f64>::eye(4));
            }
        }
    }
}

#[test]
// Purpose
// -------
// The prior is a valid distribution for every grid point.
//
// Given
// -----
// - The 54-point parameter grid.
//
// Expect
// ------
// - Four non-negative entries summing to 1 within 1e-6.
fn priors_are_valid_distributions() {
    let model = JointBinaryHlaModel::new(0.5, JointHlaOptions::default()).unwrap();
    for params in parameter_grid() {
        let prior = model.prior_probabilities(&params).unwrap();
        assert_eq!(prior.len(), 4);
        assert!(prior.iter().all(|&x| x >= 0.0));
        assert_relative_eq!(prior.sum(), 1.0, epsilon = 1e-6);
    }
}

#[test]
// Purpose
// -------
// Flat vectors round-trip and the header lines up with the values.
//
// Given
// -----
// - Each grid point.
//
// Expect
// ------
// - `parameters_from_flat(to_flat(p)) == p`; header and value lines have
//   five tab-separated columns.
fn flat_vectors_round_trip() {
    let model = JointBinaryHlaModel::new(0.5, JointHlaOptions::default()).unwrap();
    for params in parameter_grid() {
        let flat = model.to_flat(&params);
        let back = model.parameters_from_flat(flat.as_slice().unwrap()).unwrap();
        assert_eq!(back, params);
        assert_eq!(model.value_string(&params).split('\t').count(), 5);
    }
    assert_eq!(header_string("_x").split('\t').count(), 5);
}

#[test]
// Purpose
// -------
// Construction defaults and independent-model initialization follow the
// documented values.
//
// Given
// -----
// - Empirical AA equilibrium 0.4; HLA fit (0.3, 2.0), AA fit (0.7, 1.5).
//
// Expect
// ------
// - Defaults P_Hla = 0.1, P_AA = 0.4, E = 1, Lambda_Hla = 1, R = 0.
// - After init: P_Hla = 0.3, Lambda_Hla = 2.0, P_AA = 0.7, E = R = 1.5.
fn defaults_and_independent_initialization() {
    let mut model = JointBinaryHlaModel::new(0.4, JointHlaOptions::default()).unwrap();
    let d = model.parameters();
    assert_eq!(d.to_flat().to_vec(), vec![1.0, 0.0, 1.0, 0.4, 0.1]);

    let hla = BinaryParams::new(0.3, 2.0).unwrap();
    let aa = BinaryParams::new(0.7, 1.5).unwrap();
    model.init_from_independent_models(&hla, &aa).unwrap();
    assert_eq!(model.parameters().to_flat().to_vec(), vec![1.5, 1.5, 2.0, 0.7, 0.3]);
}

#[test]
// Purpose
// -------
// A corrupted generator yields NotComputable instead of a default prior.
//
// Given
// -----
// - Rates a..h with one negative entry (rejected up front), and a
//   sub-stochastic matrix `0.6 · P(1)` whose eigenvalues are all ≤ 0.6.
//
// Expect
// ------
// - `InvalidRate` for the negative rate; `NotComputable` for the
//   sub-stochastic matrix.
fn corrupted_generator_is_not_computable() {
    let rates = RateSet { a: 1.0, b: 0.5, c: -1.0, d: 0.5, e: 0.5, f: 1.0, g: 0.5, h: 1.0 };
    assert!(matches!(transition_matrix(&rates, 1.0), Err(JointError::InvalidRate { .. })));

    let valid = RateSet { c: 1.0, ..rates };
    let corrupted = transition_matrix(&valid, 1.0).unwrap() * 0.6;
    let result = stationary_from_transition(&corrupted, &StationaryOptions::default());
    match result {
        Err(JointError::NotComputable { cause }) => assert!(cause.contains("eigenvalue")),
        other => panic!("expected NotComputable, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// The symmetric-rate option makes R irrelevant.
//
// Given
// -----
// - Two parameter sets differing only in R, with the option on.
//
// Expect
// ------
// - Identical transition matrices and priors.
fn symmetric_option_ignores_r() {
    let mut opts = JointHlaOptions::default();
    opts.rates = RateOptions::new(true);
    let model = JointBinaryHlaModel::new(0.5, opts).unwrap();
    let a = JointHlaParams::new(0.6, 0.3, 0.1, 1.2, 0.8).unwrap();
    let b = JointHlaParams::new(0.6, 0.3, 5.0, 1.2, 0.8).unwrap();
    assert_eq!(
        model.transition_probability_matrix(&a, 0.7).unwrap(),
        model.transition_probability_matrix(&b, 0.7).unwrap()
    );
    assert_eq!(model.prior_probabilities(&a).unwrap(), model.prior_probabilities(&b).unwrap());
}

#[test]
// Purpose
// -------
// Unconstrained coordinates map back to the same parameters.
//
// Given
// -----
// - Each grid point, including R = 0 on the factor bound.
//
// Expect
// ------
// - Five coordinates, all finite; `from_theta(to_theta(p))` within 1e-9
//   of `p` in every flat component.
fn theta_vectors_round_trip() {
    for params in parameter_grid() {
        let theta = params.to_theta();
        assert_eq!(theta.len(), 5);
        assert!(theta.iter().all(|x| x.is_finite()));
        let back = JointHlaParams::from_theta(&theta).unwrap();
        for (a, b) in back.to_flat().iter().zip(params.to_flat().iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}

#[test]
// Purpose
// -------
// A joint model seeded from two binary models describes two independent
// characters: its prior and transitions factor into the binary ones.
//
// Given
// -----
// - HLA model (0.25, 0.6) and AA model (0.8, 2.2) as independent fits;
//   t ∈ {0.1, 1, 6}.
//
// Expect
// ------
// - π(hla, aa) = π_hla(hla) · π_aa(aa) within 1e-8.
// - P(t)[(h, a), (h', a')] = P_hla(t)[h, h'] · P_aa(t)[a, a'] within 1e-10.
fn seeded_joint_model_factors_into_binary_models() {
    let hla_model = BinaryModel::new(0.5).unwrap();
    let aa_model = BinaryModel::new(0.5).unwrap();
    let hla = BinaryParams::new(0.25, 0.6).unwrap();
    let aa = BinaryParams::new(0.8, 2.2).unwrap();
    let mut model =
        JointBinaryHlaModel::new(aa.equilibrium(), JointHlaOptions::default()).unwrap();
    model.init_from_independent_models(&hla, &aa).unwrap();
    let params = model.parameters();

    let prior = model.prior_probabilities(&params).unwrap();
    let hla_prior = hla_model.prior_probabilities(&hla).unwrap();
    let aa_prior = aa_model.prior_probabilities(&aa).unwrap();
    for state in JointState::ALL {
        assert_relative_eq!(
            prior[state.index()],
            hla_prior[state.hla()] * aa_prior[state.aa()],
            epsilon = 1e-8
        );
    }

    for &t in &[0.1, 1.0, 6.0] {
        let p = model.transition_probability_matrix(&params, t).unwrap();
        let p_hla = hla_model.transition_probability_matrix(&hla, t).unwrap();
        let p_aa = aa_model.transition_probability_matrix(&aa, t).unwrap();
        for from in JointState::ALL {
            for to in JointState::ALL {
                assert_relative_eq!(
                    p[[from.index(), to.index()]],
                    p_hla[[from.hla(), to.hla()]] * p_aa[[from.aa(), to.aa()]],
                    epsilon = 1e-10
                );
            }
        }
    }
}
