//! Nullable round clock — deterministic rounds for testing.

use ckpt_providers::RoundClock;
use ckpt_types::Round;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic round clock for testing.
///
/// The round only advances when you tell it to.
pub struct NullRoundClock {
    current: AtomicU64,
}

impl NullRoundClock {
    pub fn new(initial_round: u64) -> Self {
        Self {
            current: AtomicU64::new(initial_round),
        }
    }

    /// Advance by a number of rounds.
    pub fn advance(&self, rounds: u64) {
        self.current.fetch_add(rounds, Ordering::SeqCst);
    }

    /// Set the round to a specific value.
    pub fn set(&self, round: u64) {
        self.current.store(round, Ordering::SeqCst);
    }
}

impl RoundClock for NullRoundClock {
    fn current_round(&self) -> Round {
        Round::new(self.current.load(Ordering::SeqCst))
    }
}
