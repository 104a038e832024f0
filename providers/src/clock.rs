//! Round clock trait.

use ckpt_types::Round;

/// Source of the protocol's current round.
///
/// Implementations must be monotonically non-decreasing.
pub trait RoundClock: Send + Sync {
    /// The round the protocol is currently in.
    fn current_round(&self) -> Round;
}
