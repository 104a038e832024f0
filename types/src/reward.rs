//! Cumulative reward factors in fixed-point form.
//!
//! Factors are integers scaled by [`PERC_DIVISOR`], so `1_000_000` is 1.0x.
//! A transcoder's factor only grows: each reward round multiplies it by the
//! round's reward ratio. The constructors and `Display` assume the default
//! divisor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point divisor for reward factors: `PERC_DIVISOR` = 1.0x.
pub const PERC_DIVISOR: u128 = 1_000_000;

/// A cumulative multiplicative reward factor for one transcoder at one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardFactor(u128);

impl RewardFactor {
    /// The neutral factor (1.0x).
    pub const IDENTITY: Self = Self(PERC_DIVISOR);

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// A factor of `multiple` whole units, e.g. `from_multiple(3)` is 3.0x.
    pub fn from_multiple(multiple: u128) -> Self {
        Self(multiple.saturating_mul(PERC_DIVISOR))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for RewardFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for RewardFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:06}x",
            self.0 / PERC_DIVISOR,
            self.0 % PERC_DIVISOR
        )
    }
}
