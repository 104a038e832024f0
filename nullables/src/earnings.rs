//! Nullable earnings pools — thread-safe in-memory reward factors for testing.

use ckpt_providers::EarningsPoolProvider;
use ckpt_types::{Address, RewardFactor, Round};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory earnings pool provider for testing.
/// Thread-safe so it can back concurrent readers.
pub struct NullEarningsPool {
    factors: Mutex<HashMap<(Address, Round), RewardFactor>>,
}

impl NullEarningsPool {
    pub fn new() -> Self {
        Self {
            factors: Mutex::new(HashMap::new()),
        }
    }

    /// Record the cumulative reward factor of `transcoder` at `round`.
    pub fn set_reward_factor(&self, transcoder: &Address, round: u64, factor: RewardFactor) {
        self.factors
            .lock()
            .unwrap()
            .insert((*transcoder, Round::new(round)), factor);
    }
}

impl Default for NullEarningsPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EarningsPoolProvider for NullEarningsPool {
    fn reward_factor(&self, transcoder: &Address, round: Round) -> Option<RewardFactor> {
        self.factors
            .lock()
            .unwrap()
            .get(&(*transcoder, round))
            .copied()
    }
}
