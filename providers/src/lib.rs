//! Abstract collaborator traits for the bonding checkpoint store.
//!
//! The checkpoint store never owns the round clock, the earnings pools or the
//! writer's identity. Every host (a chain runtime, an indexer, in-memory
//! nullables for testing) implements these traits. The rest of the codebase
//! depends only on the traits.

pub mod clock;
pub mod earnings;
pub mod writer;

pub use clock::RoundClock;
pub use earnings::EarningsPoolProvider;
pub use writer::{DesignatedWriter, WriterGuard};
