//! Bonding-state records stored in each account's checkpoint series.

use crate::address::Address;
use crate::round::Round;
use serde::{Deserialize, Serialize};

/// An account's bonding state as of `start_round`.
///
/// Which fields carry meaning depends on the account's role:
/// - a transcoder delegates to itself; `delegated_amount` and
///   `last_reward_round` apply.
/// - a delegator points at someone else; `bonded_amount` and
///   `last_claim_round` apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondingState {
    /// Round at which this state takes effect (the checkpoint key).
    pub start_round: Round,
    /// Stake bonded by the account itself.
    pub bonded_amount: u128,
    /// The account this stake is delegated to.
    pub delegate_address: Address,
    /// Total stake delegated to this account (transcoders only).
    pub delegated_amount: u128,
    /// Last round the account claimed its earnings (delegators only).
    pub last_claim_round: Round,
    /// Last round the account called reward (transcoders only).
    pub last_reward_round: Round,
}

impl BondingState {
    /// Whether `account` is a transcoder under this record, i.e. it
    /// delegates to itself.
    pub fn is_transcoder(&self, account: &Address) -> bool {
        self.delegate_address == *account
    }
}
