//! Checkpoint parameters — write horizons and the reward-factor divisor.

use crate::reward::PERC_DIVISOR;
use serde::{Deserialize, Serialize};

/// Tunable limits applied by the checkpoint store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointParams {
    /// How many rounds past the current round a bonding checkpoint may be
    /// written. Default: 1 (pending next-round state).
    #[serde(default = "default_bonding_horizon")]
    pub bonding_horizon: u64,

    /// How many rounds past the current round a total-stake checkpoint may
    /// be written. Default: 0 (current round only).
    #[serde(default)]
    pub total_stake_horizon: u64,

    /// Fixed-point divisor of reward factors. Default: 1_000_000.
    ///
    /// Only read when a delegator's claim-round factor is zero, in which case
    /// the factor counts as 1.0. Growth itself is a ratio of two factors and
    /// does not depend on the divisor. Kept as `u64` since TOML integers are
    /// 64-bit.
    #[serde(default = "default_perc_divisor")]
    pub perc_divisor: u64,
}

fn default_bonding_horizon() -> u64 {
    1
}

fn default_perc_divisor() -> u64 {
    PERC_DIVISOR as u64
}

impl Default for CheckpointParams {
    fn default() -> Self {
        Self {
            bonding_horizon: default_bonding_horizon(),
            total_stake_horizon: 0,
            perc_divisor: default_perc_divisor(),
        }
    }
}
