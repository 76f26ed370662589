//! Fixed-order text rendering of joint-model parameters for external logs.
//!
//! Columns follow the flat-vector order
//! `[ETimesLambdaA, RTimesLambdaA, Lambda_Hla, P_AA, P_Hla]` and are
//! separated by a single tab.
use crate::joint_binary::core::params::{JointHlaParams, ParameterIndex, PARAM_COUNT};

pub const FIELD_SEPARATOR: &str = "\t";

/// Header labels in print order.
pub const HEADER_LABELS: [&str; PARAM_COUNT] =
    ["(1-e)*Lambda_AA", "(1-r)*Lambda_AA", "Lambda_Hla", "P_AA", "P_Hla"];

/// Header line; `suffix` is appended to every label, which keeps columns
/// distinct when several branches are reported on one line.
pub fn header_string(suffix: &str) -> String {
    HEADER_LABELS
        .iter()
        .map(|label| format!("{label}{suffix}"))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Value line matching [`header_string`].
pub fn value_string(params: &JointHlaParams) -> String {
    params.to_flat().iter().map(|v| v.to_string()).collect::<Vec<_>>().join(FIELD_SEPARATOR)
}

/// Display name of each parameter, keyed by index.
pub fn display_name(idx: ParameterIndex) -> &'static str {
    match idx {
        ParameterIndex::PAa => "P_AA",
        ParameterIndex::PHla => "P_Hla",
        ParameterIndex::RTimesLambdaA => "E_R_Ratio",
        ParameterIndex::ETimesLambdaA => "Lambda_AA",
        ParameterIndex::LambdaHla => "Lambda_Hla",
    }
}

/// Display names in index order.
pub fn parameter_names() -> [&'static str; PARAM_COUNT] {
    ParameterIndex::ALL.map(display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Header labels appear in print order with the suffix on every column.
    //
    // Given
    // -----
    // - Suffix "" and suffix "_b2".
    //
    // Expect
    // ------
    // - Five tab-separated labels; the suffixed header ends each label with "_b2".
    fn header_carries_suffix_on_every_label() {
        assert_eq!(
            header_string(""),
            "(1-e)*Lambda_AA\t(1-r)*Lambda_AA\tLambda_Hla\tP_AA\tP_Hla"
        );
        let suffixed = header_string("_b2");
        let cols: Vec<&str> = suffixed.split('\t').collect();
        assert_eq!(cols.len(), 5);
        assert!(cols.iter().all(|c| c.ends_with("_b2")));
        assert_eq!(cols[4], "P_Hla_b2");
    }

    #[test]
    // Purpose
    // -------
    // Values are rendered in print order.
    //
    // Given
    // -----
    // - P_AA = 0.7, P_Hla = 0.2, R = 0.5, E = 2, Lambda_Hla = 3.
    //
    // Expect
    // ------
    // - "2\t0.5\t3\t0.7\t0.2".
    fn values_follow_print_order() {
        let params = JointHlaParams::new(0.7, 0.2, 0.5, 2.0, 3.0).unwrap();
        assert_eq!(value_string(&params), "2\t0.5\t3\t0.7\t0.2");
    }

    #[test]
    // Purpose
    // -------
    // Display names are keyed by the stable parameter index.
    //
    // Given
    // -----
    // - `parameter_names()`.
    //
    // Expect
    // ------
    // - Index order P_AA, P_Hla, E_R_Ratio, Lambda_AA, Lambda_Hla.
    fn display_names_in_index_order() {
        assert_eq!(
            parameter_names(),
            ["P_AA", "P_Hla", "E_R_Ratio", "Lambda_AA", "Lambda_Hla"]
        );
    }
}
