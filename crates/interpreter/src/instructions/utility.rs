//! Conversions between stack words and the address/hash types.

use primitives::{Address, B256, U256};

pub(crate) trait IntoAddress {
    /// Truncates the word to its low 20 bytes.
    fn into_address(self) -> Address;
}

pub(crate) trait IntoU256 {
    fn into_u256(self) -> U256;
}

impl IntoAddress for U256 {
    #[inline]
    fn into_address(self) -> Address {
        Address::from_word(B256::from(self))
    }
}

impl IntoU256 for B256 {
    #[inline]
    fn into_u256(self) -> U256 {
        U256::from_be_bytes(self.0)
    }
}

impl IntoU256 for Address {
    #[inline]
    fn into_u256(self) -> U256 {
        self.into_word().into_u256()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::address;

    #[test]
    fn address_word_round_trip() {
        let addr = address!("0xdeadbeef00000000000000000000000000000001");
        assert_eq!(addr.into_u256().into_address(), addr);
    }

    #[test]
    fn high_bytes_are_truncated() {
        let word = U256::from_be_bytes([0xff; 32]);
        assert_eq!(word.into_address(), Address::from([0xff; 20]));
    }
}
