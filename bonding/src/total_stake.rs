//! Global total-active-stake checkpoints.

use crate::error::CheckpointError;
use ckpt_series::OrderedCheckpointSeries;
use ckpt_types::Round;
use std::sync::{PoisonError, RwLock};

/// The total active stake of the protocol, checkpointed by round.
///
/// One global series. Writes are accepted up to `horizon` rounds past the
/// current round (zero by default, i.e. the current round itself).
pub struct TotalStakeCheckpoints {
    series: RwLock<OrderedCheckpointSeries<u128>>,
    horizon: u64,
}

impl TotalStakeCheckpoints {
    pub fn new(horizon: u64) -> Self {
        Self {
            series: RwLock::new(OrderedCheckpointSeries::new()),
            horizon,
        }
    }

    /// Record `total_stake` at `round`, given the clock's `current` round.
    pub fn checkpoint(
        &self,
        round: Round,
        total_stake: u128,
        current: Round,
    ) -> Result<(), CheckpointError> {
        let max_round = current.saturating_add(self.horizon);
        if round > max_round {
            tracing::warn!(%round, %current, "total stake checkpoint past the current round rejected");
            return Err(CheckpointError::PrecedingRoundViolation { round, max_round });
        }

        let mut series = self.series.write().unwrap_or_else(PoisonError::into_inner);
        series.upsert(round, total_stake).map_err(|e| {
            tracing::error!(%round, error = %e, "out-of-order total stake checkpoint");
            CheckpointError::from(e)
        })?;
        tracing::debug!(%round, total_stake, "checkpointed total active stake");
        Ok(())
    }

    /// The total active stake as of `round`.
    pub fn get_at(&self, round: Round, current: Round) -> Result<u128, CheckpointError> {
        if round > current {
            return Err(CheckpointError::FutureLookup { round, current });
        }
        let series = self.series.read().unwrap_or_else(PoisonError::into_inner);
        let stake = series.lower_bound(round).copied()?;
        tracing::trace!(%round, stake, "total active stake lookup");
        Ok(stake)
    }

    pub fn has_checkpoint(&self) -> bool {
        self.series
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_any()
    }

    /// A copy of the full series.
    pub fn snapshot(&self) -> OrderedCheckpointSeries<u128> {
        self.series
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for TotalStakeCheckpoints {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoCheckpointCause;

    const CURRENT: Round = Round::new(100);

    #[test]
    fn checkpoint_in_current_round() {
        let stake = TotalStakeCheckpoints::default();
        stake.checkpoint(CURRENT, 1337, CURRENT).unwrap();
        assert_eq!(stake.get_at(CURRENT, CURRENT), Ok(1337));
        assert!(stake.has_checkpoint());
    }

    #[test]
    fn checkpoint_after_current_round_rejected() {
        let stake = TotalStakeCheckpoints::default();
        assert_eq!(
            stake.checkpoint(CURRENT.next(), 1337, CURRENT),
            Err(CheckpointError::PrecedingRoundViolation {
                round: Round::new(101),
                max_round: CURRENT
            })
        );
        assert!(!stake.has_checkpoint());
    }

    #[test]
    fn wider_horizon_allows_next_round() {
        let stake = TotalStakeCheckpoints::new(1);
        stake.checkpoint(CURRENT.next(), 5, CURRENT).unwrap();
        assert!(stake.checkpoint(Round::new(102), 5, CURRENT).is_err());
    }

    #[test]
    fn past_rounds_are_queryable() {
        let stake = TotalStakeCheckpoints::default();
        for (value, round) in [(500, 95), (1000, 96), (1500, 97), (2000, 98), (2500, 99)] {
            stake.checkpoint(Round::new(round), value, CURRENT).unwrap();
        }
        for (value, round) in [(500, 95), (1000, 96), (1500, 97), (2000, 98), (2500, 99)] {
            assert_eq!(stake.get_at(Round::new(round), CURRENT), Ok(value));
        }
        assert_eq!(stake.get_at(CURRENT, CURRENT), Ok(2500));
        assert_eq!(
            stake.get_at(Round::new(94), CURRENT),
            Err(CheckpointError::NoCheckpointFound {
                account: None,
                cause: NoCheckpointCause::BelowRange {
                    first: Round::new(95)
                }
            })
        );
    }

    #[test]
    fn future_lookup_rejected() {
        let stake = TotalStakeCheckpoints::default();
        stake.checkpoint(CURRENT, 1, CURRENT).unwrap();
        assert_eq!(
            stake.get_at(Round::new(101), CURRENT),
            Err(CheckpointError::FutureLookup {
                round: Round::new(101),
                current: CURRENT
            })
        );
    }

    #[test]
    fn empty_lookup_fails() {
        let stake = TotalStakeCheckpoints::default();
        assert_eq!(
            stake.get_at(CURRENT, CURRENT),
            Err(CheckpointError::NoCheckpointFound {
                account: None,
                cause: NoCheckpointCause::EmptySeries
            })
        );
    }

    #[test]
    fn out_of_order_write_rejected() {
        let stake = TotalStakeCheckpoints::default();
        stake.checkpoint(Round::new(99), 1, CURRENT).unwrap();
        assert_eq!(
            stake.checkpoint(Round::new(98), 2, CURRENT),
            Err(CheckpointError::OutOfOrderWrite {
                last: Round::new(99),
                attempted: Round::new(98)
            })
        );
        assert_eq!(stake.snapshot().len(), 1);
    }
}
