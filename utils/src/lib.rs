//! Shared utilities for the bonding checkpoint store.

pub mod logging;

pub use logging::{init_logging, init_tracing, LogFormat, UnknownLogFormat};
