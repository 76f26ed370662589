//! Joint binary states of the (HLA, AA) character pair.
//!
//! A joint state combines a binary HLA-linked covariate and a binary
//! amino-acid character. States are indexed `2·hla + aa` where, for each
//! character, value 0 is the state whose equilibrium frequency is the
//! model's `P_Hla` / `P_AA`. The index order is the row/column order of every
//! transition matrix and prior vector in this crate.
use crate::joint_binary::errors::{JointError, JointResult};

/// Number of joint states.
pub const JOINT_STATE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JointState {
    /// hla = 0, aa = 0
    HlaAa,
    /// hla = 0, aa = 1
    HlaNotAa,
    /// hla = 1, aa = 0
    NotHlaAa,
    /// hla = 1, aa = 1
    NotHlaNotAa,
}

impl JointState {
    /// All joint states in index order.
    pub const ALL: [JointState; JOINT_STATE_COUNT] =
        [JointState::HlaAa, JointState::HlaNotAa, JointState::NotHlaAa, JointState::NotHlaNotAa];

    /// Build from the two binary character values.
    ///
    /// # Errors
    /// [`JointError::InvalidStateIndex`] if either value is not 0 or 1.
    pub fn from_characters(hla: usize, aa: usize) -> JointResult<Self> {
        if hla > 1 {
            return Err(JointError::InvalidStateIndex { index: hla });
        }
        if aa > 1 {
            return Err(JointError::InvalidStateIndex { index: aa });
        }
        Self::from_index(2 * hla + aa)
    }

    /// # Errors
    /// [`JointError::InvalidStateIndex`] for `index >= 4`.
    pub fn from_index(index: usize) -> JointResult<Self> {
        Self::ALL.get(index).copied().ok_or(JointError::InvalidStateIndex { index })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hla(self) -> usize {
        self.index() / 2
    }

    pub fn aa(self) -> usize {
        self.index() % 2
    }
}
