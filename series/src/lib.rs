//! Ordered checkpoint series.
//!
//! A series is a round-indexed time series of values that only grows at the
//! tail. This crate handles:
//! - Insert-or-overwrite at the latest round (O(1) amortized)
//! - Point-in-time lookup of the newest value at or before a round (O(log n))
//! - Serialization as the ordered list of `(round, value)` entries

pub mod error;
pub mod series;

pub use error::SeriesError;
pub use series::{Checkpoint, OrderedCheckpointSeries};
