//! Checkpoint store errors.

use ckpt_series::SeriesError;
use ckpt_types::{Address, Round};
use thiserror::Error;

/// Why a lower-bound lookup found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoCheckpointCause {
    /// Nothing was ever checkpointed.
    EmptySeries,
    /// Checkpoints exist, but all of them are after the queried round.
    BelowRange { first: Round },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("out-of-order checkpoint write at round {attempted}, last recorded round is {last}")]
    OutOfOrderWrite { last: Round, attempted: Round },

    #[error("caller {0} is not the checkpoint writer")]
    UnauthorizedWriter(Address),

    #[error("future lookup: round {round} is after current round {current}")]
    FutureLookup { round: Round, current: Round },

    #[error("cannot checkpoint round {round}, latest writable round is {max_round}")]
    PrecedingRoundViolation { round: Round, max_round: Round },

    #[error("no checkpoint found{}: {}", account_suffix(.account), cause_text(.cause))]
    NoCheckpointFound {
        account: Option<Address>,
        cause: NoCheckpointCause,
    },

    #[error("missing earning pool of {delegate} at delegator's last claim round {round}")]
    MissingClaimRoundEarningsPool { delegate: Address, round: Round },

    #[error("missing earning pool of {delegate} at its last reward round {round}")]
    MissingRewardRoundEarningsPool { delegate: Address, round: Round },

    #[error("arithmetic overflow in stake computation")]
    Overflow,

    #[error("config error: {0}")]
    Config(String),
}

fn account_suffix(account: &Option<Address>) -> String {
    match account {
        Some(a) => format!(" for {a}"),
        None => String::new(),
    }
}

fn cause_text(cause: &NoCheckpointCause) -> String {
    match cause {
        NoCheckpointCause::EmptySeries => "never checkpointed".to_string(),
        NoCheckpointCause::BelowRange { first } => {
            format!("all checkpoints are after the queried round (first at {first})")
        }
    }
}

impl CheckpointError {
    /// Attach the account whose series produced a lookup failure.
    pub(crate) fn from_series(err: SeriesError, account: Option<Address>) -> Self {
        match err {
            SeriesError::OutOfOrderWrite { last, attempted } => {
                Self::OutOfOrderWrite { last, attempted }
            }
            SeriesError::EmptySeries => Self::NoCheckpointFound {
                account,
                cause: NoCheckpointCause::EmptySeries,
            },
            SeriesError::BelowRangeLookup { first, .. } => Self::NoCheckpointFound {
                account,
                cause: NoCheckpointCause::BelowRange { first },
            },
        }
    }
}

impl From<SeriesError> for CheckpointError {
    fn from(err: SeriesError) -> Self {
        Self::from_series(err, None)
    }
}
