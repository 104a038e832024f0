//! Series-specific errors.

use ckpt_types::Round;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("out-of-order checkpoint write at round {attempted}, last recorded round is {last}")]
    OutOfOrderWrite { last: Round, attempted: Round },

    #[error("series has no checkpoints")]
    EmptySeries,

    #[error("no checkpoint at or before round {round}, first checkpoint is at round {first}")]
    BelowRangeLookup { round: Round, first: Round },
}
