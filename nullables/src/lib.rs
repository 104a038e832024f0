//! Nullable infrastructure for deterministic testing.
//!
//! The checkpoint store's collaborators (round clock, earnings pools) are
//! abstracted behind the traits in `ckpt-providers`. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod earnings;

pub use clock::NullRoundClock;
pub use earnings::NullEarningsPool;
