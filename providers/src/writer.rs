//! Writer authorization.

use ckpt_types::Address;

/// Decides whether a caller may mutate checkpoints.
pub trait WriterGuard: Send + Sync {
    fn is_writer(&self, caller: &Address) -> bool;
}

/// A guard that authorizes exactly one address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignatedWriter(pub Address);

impl WriterGuard for DesignatedWriter {
    fn is_writer(&self, caller: &Address) -> bool {
        self.0 == *caller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_designated_address_is_writer() {
        let writer = Address::new([1u8; 20]);
        let guard = DesignatedWriter(writer);
        assert!(guard.is_writer(&writer));
        assert!(!guard.is_writer(&Address::new([2u8; 20])));
        assert!(!guard.is_writer(&Address::ZERO));
    }
}
