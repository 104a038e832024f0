//! Bonding checkpoints — historical stake by round.
//!
//! Answers "what was account X's effective stake, and to whom was it
//! delegated, as of round R?" without storing a snapshot per round.
//!
//! This crate handles:
//! - The global total-active-stake series
//! - One bonding-state series per account, created on first write
//! - Delegator stake reconstruction from the delegate's reward factors
//! - Writer authorization and round-horizon checks on every write

pub mod account;
pub mod checkpoints;
pub mod config;
pub mod error;
pub mod resolver;
pub mod total_stake;

pub use account::AccountBondingCheckpoints;
pub use checkpoints::BondingCheckpoints;
pub use config::CheckpointConfig;
pub use error::{CheckpointError, NoCheckpointCause};
pub use resolver::{cumulative_stake, BondingStateResolver};
pub use total_stake::TotalStakeCheckpoints;
