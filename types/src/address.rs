//! Account address type with `0x` hex rendering.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 20-byte account identifier.
///
/// Rendered as `0x` followed by 40 lowercase hex characters. Both
/// transcoders and delegators are identified this way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Byte length of an address.
    pub const LEN: usize = 20;

    /// The standard prefix for rendered addresses.
    pub const PREFIX: &'static str = "0x";

    /// The all-zero address (an account bonded to nobody).
    pub const ZERO: Self = Self([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TypesError::MissingAddressPrefix(s.to_string()))?;
        let bytes = hex::decode(digits).map_err(|e| TypesError::InvalidAddressHex(e.to_string()))?;
        let bytes: [u8; 20] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TypesError::InvalidAddressLength {
                expected: Self::LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let mut bytes = [0u8; 20];
        bytes[19] = 0xab;
        let addr = Address::new(bytes);
        let rendered = addr.to_string();
        assert_eq!(rendered, "0x00000000000000000000000000000000000000ab");
        assert_eq!(rendered.parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        let err = "00000000000000000000000000000000000000ab".parse::<Address>().unwrap_err();
        assert!(matches!(err, TypesError::MissingAddressPrefix(_)));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "0xabcd".parse::<Address>().unwrap_err();
        assert_eq!(
            err,
            TypesError::InvalidAddressLength {
                expected: 20,
                actual: 2
            }
        );
    }

    #[test]
    fn parse_rejects_bad_hex() {
        let err = "0xzz000000000000000000000000000000000000ab".parse::<Address>().unwrap_err();
        assert!(matches!(err, TypesError::InvalidAddressHex(_)));
    }

    #[test]
    fn zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1u8; 20]).is_zero());
    }
}
