//! Earnings pool (reward factor) lookup trait.

use ckpt_types::{Address, RewardFactor, Round};

/// Read-only access to transcoders' per-round cumulative reward factors.
pub trait EarningsPoolProvider: Send + Sync {
    /// The cumulative reward factor of `transcoder` recorded at exactly `round`.
    ///
    /// Returns `None` when the transcoder has no earnings pool for that round.
    fn reward_factor(&self, transcoder: &Address, round: Round) -> Option<RewardFactor>;
}
