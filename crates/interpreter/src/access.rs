//! Per-transaction warm/cold access tracking.

use primitives::{Address, HashSet, U256};

/// Tracks which addresses and storage slots the current transaction has
/// already touched.
///
/// Warmth is transaction-scoped, not frame-scoped: one tracker is created
/// when the transaction starts, shared by `&mut` across the whole nested
/// call tree, and dropped when the transaction ends. A reverting sub-call
/// does **not** undo the warming it performed — the sets are insertion-only
/// for the tracker's entire lifetime. Membership therefore means "the
/// first-access cost for this key has already been charged somewhere in
/// this transaction".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessTracker {
    warm_addresses: HashSet<Address>,
    warm_storage_slots: HashSet<(Address, U256)>,
}

impl AccessTracker {
    /// Creates an empty tracker for a fresh transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker pre-warmed with `addresses`.
    ///
    /// Used at transaction start for the addresses the protocol considers
    /// warm before any instruction runs (origin, target, precompiles, and
    /// access-list entries).
    pub fn new_with_preloaded(addresses: impl IntoIterator<Item = Address>) -> Self {
        let mut this = Self::default();
        this.preload(addresses);
        this
    }

    /// Marks `addresses` warm without reporting coldness.
    ///
    /// The frame-start seeding step: executing contract, caller, and
    /// (fork-dependent) precompiles are warmed here before the cost policy
    /// is ever consulted for them.
    pub fn preload(&mut self, addresses: impl IntoIterator<Item = Address>) {
        self.warm_addresses.extend(addresses);
    }

    /// Returns whether `address` has been touched in this transaction.
    #[inline]
    pub fn is_address_warm(&self, address: Address) -> bool {
        self.warm_addresses.contains(&address)
    }

    /// Marks `address` warm. Returns `true` if it was cold, i.e. this call
    /// is the first touch in the transaction. Idempotent: marking an
    /// already-warm address is a no-op that returns `false`.
    #[inline]
    pub fn mark_address_warm(&mut self, address: Address) -> bool {
        self.warm_addresses.insert(address)
    }

    /// Returns whether the storage slot `(address, key)` has been touched
    /// in this transaction.
    #[inline]
    pub fn is_storage_warm(&self, address: Address, key: U256) -> bool {
        self.warm_storage_slots.contains(&(address, key))
    }

    /// Marks the storage slot `(address, key)` warm. Returns `true` if it
    /// was cold. Slots are tracked per address: equal keys under different
    /// addresses are independent.
    #[inline]
    pub fn mark_storage_warm(&mut self, address: Address, key: U256) -> bool {
        self.warm_storage_slots.insert((address, key))
    }

    /// Number of warm addresses. Exposed for metering diagnostics.
    pub fn warm_address_count(&self) -> usize {
        self.warm_addresses.len()
    }

    /// Number of warm storage slots. Exposed for metering diagnostics.
    pub fn warm_storage_count(&self) -> usize {
        self.warm_storage_slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::address;

    const A: Address = address!("0x1000000000000000000000000000000000000001");
    const B: Address = address!("0x1000000000000000000000000000000000000002");

    #[test]
    fn address_warming_is_idempotent() {
        let mut tracker = AccessTracker::new();
        assert!(!tracker.is_address_warm(A));
        assert!(tracker.mark_address_warm(A));
        assert!(tracker.is_address_warm(A));
        // second mark reports warm and changes nothing
        assert!(!tracker.mark_address_warm(A));
        assert!(tracker.is_address_warm(A));
        assert_eq!(tracker.warm_address_count(), 1);
    }

    #[test]
    fn storage_slots_are_independent_per_address_and_key() {
        let mut tracker = AccessTracker::new();
        assert!(tracker.mark_storage_warm(A, U256::from(5)));

        assert!(tracker.is_storage_warm(A, U256::from(5)));
        assert!(!tracker.is_storage_warm(B, U256::from(5)));
        assert!(!tracker.is_storage_warm(A, U256::from(6)));

        // warming a slot does not warm its address
        assert!(!tracker.is_address_warm(A));
    }

    #[test]
    fn storage_warming_is_idempotent() {
        let mut tracker = AccessTracker::new();
        assert!(tracker.mark_storage_warm(A, U256::ZERO));
        assert!(!tracker.mark_storage_warm(A, U256::ZERO));
        assert_eq!(tracker.warm_storage_count(), 1);
    }

    #[test]
    fn preload_seeds_addresses_warm() {
        let tracker = AccessTracker::new_with_preloaded([A, B]);
        assert!(tracker.is_address_warm(A));
        assert!(tracker.is_address_warm(B));
    }
}
