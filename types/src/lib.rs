//! Fundamental types for the bonding checkpoint store.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! rounds, account addresses, bonding-state records, reward factors and the
//! checkpoint parameters.

pub mod address;
pub mod bonding;
pub mod error;
pub mod params;
pub mod reward;
pub mod round;

pub use address::Address;
pub use bonding::BondingState;
pub use error::TypesError;
pub use params::CheckpointParams;
pub use reward::{RewardFactor, PERC_DIVISOR};
pub use round::Round;
