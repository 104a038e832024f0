//! The bonding checkpoint store — write and query entry point.

use crate::account::AccountBondingCheckpoints;
use crate::config::CheckpointConfig;
use crate::error::CheckpointError;
use crate::resolver::BondingStateResolver;
use crate::total_stake::TotalStakeCheckpoints;
use ckpt_providers::{DesignatedWriter, EarningsPoolProvider, RoundClock, WriterGuard};
use ckpt_types::{Address, BondingState, CheckpointParams, Round};
use std::sync::Arc;

/// Historical stake checkpoints for the protocol.
///
/// Owns the global total-stake series and the per-account bonding series.
/// Mutations are accepted only from the writer; queries are open to anyone
/// and may run concurrently with writes.
pub struct BondingCheckpoints {
    total_stake: TotalStakeCheckpoints,
    bonding: AccountBondingCheckpoints,
    clock: Arc<dyn RoundClock>,
    earnings: Arc<dyn EarningsPoolProvider>,
    writer: Arc<dyn WriterGuard>,
    params: CheckpointParams,
}

impl BondingCheckpoints {
    /// Clock description reported alongside [`BondingCheckpoints::clock`].
    pub const CLOCK_MODE: &'static str = "mode=livepeer_round";

    pub fn new(
        clock: Arc<dyn RoundClock>,
        earnings: Arc<dyn EarningsPoolProvider>,
        writer: Arc<dyn WriterGuard>,
        params: CheckpointParams,
    ) -> Self {
        Self {
            total_stake: TotalStakeCheckpoints::new(params.total_stake_horizon),
            bonding: AccountBondingCheckpoints::new(params.bonding_horizon),
            clock,
            earnings,
            writer,
            params,
        }
    }

    /// Build a store whose only writer is `config.writer`.
    pub fn from_config(
        config: &CheckpointConfig,
        clock: Arc<dyn RoundClock>,
        earnings: Arc<dyn EarningsPoolProvider>,
    ) -> Result<Self, CheckpointError> {
        config.validate()?;
        Ok(Self::new(
            clock,
            earnings,
            Arc::new(DesignatedWriter(config.writer)),
            config.params.clone(),
        ))
    }

    /// The current round.
    pub fn clock(&self) -> Round {
        self.clock.current_round()
    }

    pub fn clock_mode(&self) -> &'static str {
        Self::CLOCK_MODE
    }

    fn ensure_writer(&self, caller: &Address) -> Result<(), CheckpointError> {
        if self.writer.is_writer(caller) {
            Ok(())
        } else {
            tracing::warn!(%caller, "checkpoint write from non-writer rejected");
            Err(CheckpointError::UnauthorizedWriter(*caller))
        }
    }

    // ── Writes ─────────────────────────────────────────────────────────

    /// Record the total active stake at `round` (at most the current round
    /// under default parameters).
    pub fn checkpoint_total_active_stake(
        &self,
        caller: &Address,
        total_stake: u128,
        round: Round,
    ) -> Result<(), CheckpointError> {
        self.ensure_writer(caller)?;
        self.total_stake.checkpoint(round, total_stake, self.clock())
    }

    /// Record the bonding state of `account`, keyed by `state.start_round`
    /// (at most the next round under default parameters).
    pub fn checkpoint_bonding_state(
        &self,
        caller: &Address,
        account: &Address,
        state: BondingState,
    ) -> Result<(), CheckpointError> {
        self.ensure_writer(caller)?;
        self.bonding.checkpoint(account, state, self.clock())
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn has_checkpoint(&self, account: &Address) -> bool {
        self.bonding.has_checkpoint(account)
    }

    pub fn get_total_active_stake_at(&self, round: Round) -> Result<u128, CheckpointError> {
        self.total_stake.get_at(round, self.clock())
    }

    /// The raw bonding checkpoint of `account` in effect at `round`.
    pub fn get_bonding_checkpoint_at(
        &self,
        account: &Address,
        round: Round,
    ) -> Result<BondingState, CheckpointError> {
        self.bonding
            .get_last_checkpoint_before(account, round, self.clock())
    }

    /// `(effective stake, delegate)` of `account` as of `round`.
    pub fn get_bonding_state_at(
        &self,
        account: &Address,
        round: Round,
    ) -> Result<(u128, Address), CheckpointError> {
        let current = self.clock();
        BondingStateResolver::new(
            &self.bonding,
            self.earnings.as_ref(),
            u128::from(self.params.perc_divisor),
        )
        .get_bonding_state_at(account, round, current)
    }

    pub fn bonding(&self) -> &AccountBondingCheckpoints {
        &self.bonding
    }
}
