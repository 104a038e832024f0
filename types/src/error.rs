//! Errors raised while constructing or parsing core types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("address must start with 0x: {0}")]
    MissingAddressPrefix(String),

    #[error("address must be {expected} bytes, got {actual}")]
    InvalidAddressLength { expected: usize, actual: usize },

    #[error("address is not valid hex: {0}")]
    InvalidAddressHex(String),
}
