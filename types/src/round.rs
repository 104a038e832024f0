//! Round type used to key every checkpoint.
//!
//! A round is the protocol's discrete unit of time. Rounds start at zero and
//! only move forward.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A protocol round number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round(u64);

impl Round {
    /// The first round.
    pub const ZERO: Self = Self(0);

    pub const fn new(round: u64) -> Self {
        Self(round)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The round `offset` rounds after this one, clamped at `u64::MAX`.
    pub fn saturating_add(self, offset: u64) -> Self {
        Self(self.0.saturating_add(offset))
    }

    /// The following round.
    pub fn next(self) -> Self {
        self.saturating_add(1)
    }
}

impl From<u64> for Round {
    fn from(round: u64) -> Self {
        Self(round)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
