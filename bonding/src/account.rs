//! Per-account bonding-state checkpoints.
//!
//! Each account gets its own series, created on its first checkpoint and
//! never removed. The table is guarded by one reader-writer lock, held for
//! the duration of a single upsert or lookup.

use crate::error::CheckpointError;
use ckpt_series::OrderedCheckpointSeries;
use ckpt_types::{Address, BondingState, Round};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

pub struct AccountBondingCheckpoints {
    accounts: RwLock<HashMap<Address, OrderedCheckpointSeries<BondingState>>>,
    /// Rounds past the current round a checkpoint may be written at.
    horizon: u64,
}

impl AccountBondingCheckpoints {
    pub fn new(horizon: u64) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            horizon,
        }
    }

    /// Record `state` for `account` at `state.start_round`.
    ///
    /// The round may be at most `horizon` rounds past `current`. Writing the
    /// same round again overwrites it, so the writer can checkpoint the
    /// current state and then the pending one within one operation.
    pub fn checkpoint(
        &self,
        account: &Address,
        state: BondingState,
        current: Round,
    ) -> Result<(), CheckpointError> {
        let round = state.start_round;
        let max_round = current.saturating_add(self.horizon);
        if round > max_round {
            tracing::warn!(%account, %round, %current, "bonding checkpoint past the write horizon rejected");
            return Err(CheckpointError::PrecedingRoundViolation { round, max_round });
        }

        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        accounts
            .entry(*account)
            .or_default()
            .upsert(round, state)
            .map_err(|e| {
                tracing::error!(%account, %round, error = %e, "out-of-order bonding checkpoint");
                CheckpointError::from_series(e, Some(*account))
            })?;
        tracing::debug!(%account, %round, "checkpointed bonding state");
        Ok(())
    }

    /// Whether `account` was ever checkpointed.
    pub fn has_checkpoint(&self, account: &Address) -> bool {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .is_some_and(|series| series.has_any())
    }

    /// The latest bonding state of `account` recorded at or before `round`.
    pub fn get_last_checkpoint_before(
        &self,
        account: &Address,
        round: Round,
        current: Round,
    ) -> Result<BondingState, CheckpointError> {
        if round > current {
            return Err(CheckpointError::FutureLookup { round, current });
        }
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        let empty = OrderedCheckpointSeries::new();
        let series = accounts.get(account).unwrap_or(&empty);
        let state = series
            .lower_bound(round)
            .map_err(|e| CheckpointError::from_series(e, Some(*account)))?
            .clone();
        tracing::trace!(%account, %round, start_round = %state.start_round, "bonding checkpoint lookup");
        Ok(state)
    }

    /// Number of accounts with at least one checkpoint.
    pub fn account_count(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of checkpoints recorded for `account`.
    pub fn checkpoint_count(&self, account: &Address) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .map_or(0, |series| series.len())
    }

    /// A copy of `account`'s full series, if it has one.
    pub fn snapshot(&self, account: &Address) -> Option<OrderedCheckpointSeries<BondingState>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .cloned()
    }
}

impl Default for AccountBondingCheckpoints {
    fn default() -> Self {
        Self::new(1)
    }
}
