//! Network identity guard
//!
//! Gates every mutating operation on the wallet being connected to the
//! registry's deployment network. Reads are deliberately unaffected; only
//! writes are refused client-side on a mismatch.

use crate::error::RegistryError;

/// Require the wallet's connected network identity to match the registry's
///
/// Pure comparison with no side effects. Called once after connect (where a
/// mismatch is reported but does not block the connection) and before every
/// write (where it does).
pub fn require_network(current: u64, required: u64) -> Result<(), RegistryError> {
    if current == required {
        Ok(())
    } else {
        Err(RegistryError::WrongNetwork { current, required })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_network_passes() {
        assert!(require_network(8408, 8408).is_ok());
    }

    #[test]
    fn test_mismatch_carries_both_identities() {
        let err = require_network(1, 8408).unwrap_err();
        assert_eq!(
            err,
            RegistryError::WrongNetwork {
                current: 1,
                required: 8408
            }
        );
    }
}
