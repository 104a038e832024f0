//! Point-in-time bonding state resolution.
//!
//! A transcoder's checkpoint already carries its delegated total. A
//! delegator's checkpoint only carries the stake it had at its last claim, so
//! its current stake is projected forward with the delegate's cumulative
//! reward factors:
//!
//! `stake = bonded_amount × factor(last_reward_round) / factor(last_claim_round)`

use crate::account::AccountBondingCheckpoints;
use crate::error::CheckpointError;
use ckpt_providers::EarningsPoolProvider;
use ckpt_types::{Address, BondingState, RewardFactor, Round};

/// Resolves `(effective stake, delegate)` for an account at a past round.
pub struct BondingStateResolver<'a> {
    checkpoints: &'a AccountBondingCheckpoints,
    earnings: &'a dyn EarningsPoolProvider,
    perc_divisor: u128,
}

impl<'a> BondingStateResolver<'a> {
    pub fn new(
        checkpoints: &'a AccountBondingCheckpoints,
        earnings: &'a dyn EarningsPoolProvider,
        perc_divisor: u128,
    ) -> Self {
        Self {
            checkpoints,
            earnings,
            perc_divisor,
        }
    }

    /// The effective stake of `account` as of `round` and the address it was
    /// delegated to.
    pub fn get_bonding_state_at(
        &self,
        account: &Address,
        round: Round,
        current: Round,
    ) -> Result<(u128, Address), CheckpointError> {
        if round > current {
            return Err(CheckpointError::FutureLookup { round, current });
        }

        let bond = self
            .checkpoints
            .get_last_checkpoint_before(account, round, current)?;

        if bond.is_transcoder(account) {
            return Ok((bond.delegated_amount, *account));
        }

        let stake = self.delegator_stake_at(&bond, round, current)?;
        Ok((stake, bond.delegate_address))
    }

    fn delegator_stake_at(
        &self,
        bond: &BondingState,
        round: Round,
        current: Round,
    ) -> Result<u128, CheckpointError> {
        let delegate = bond.delegate_address;
        let claim_round = bond.last_claim_round;

        let start_factor = self
            .earnings
            .reward_factor(&delegate, claim_round)
            .ok_or_else(|| {
                tracing::error!(%delegate, %claim_round, "missing earnings pool at delegator's last claim round");
                CheckpointError::MissingClaimRoundEarningsPool {
                    delegate,
                    round: claim_round,
                }
            })?;

        let delegate_bond = self
            .checkpoints
            .get_last_checkpoint_before(&delegate, round, current)?;
        let reward_round = delegate_bond.last_reward_round;

        if reward_round < claim_round {
            return Ok(bond.bonded_amount);
        }

        let end_factor = self
            .earnings
            .reward_factor(&delegate, reward_round)
            .ok_or_else(|| {
                tracing::error!(%delegate, %reward_round, "missing earnings pool at transcoder's last reward round");
                CheckpointError::MissingRewardRoundEarningsPool {
                    delegate,
                    round: reward_round,
                }
            })?;

        let stake = cumulative_stake(bond.bonded_amount, start_factor, end_factor, self.perc_divisor)?;
        tracing::trace!(%delegate, %claim_round, %reward_round, bonded = bond.bonded_amount, stake, "projected delegator stake");
        Ok(stake)
    }
}

/// `bonded × end / start`, truncating.
///
/// A zero start factor is a pool created before factors were tracked and
/// counts as 1.0 (`perc_divisor`).
pub fn cumulative_stake(
    bonded: u128,
    start: RewardFactor,
    end: RewardFactor,
    perc_divisor: u128,
) -> Result<u128, CheckpointError> {
    let start = if start.is_zero() {
        perc_divisor
    } else {
        start.raw()
    };
    bonded
        .checked_mul(end.raw())
        .and_then(|scaled| scaled.checked_div(start))
        .ok_or(CheckpointError::Overflow)
}
