//! Access-cost policy: the one warm-or-cold branch every state-touching
//! opcode family shares.

use crate::access::AccessTracker;
use primitives::{Address, U256};

/// Picks between the caller-supplied cold and warm cost.
#[inline]
pub const fn warm_cold_cost(is_cold: bool, cold_cost: u64, warm_cost: u64) -> u64 {
    if is_cold {
        cold_cost
    } else {
        warm_cost
    }
}

/// Derives the account access charge for `address` and warms it.
///
/// Returns `(was_cold, cost)`: the cold cost and `true` on the first touch
/// in this transaction, the warm cost and `false` on every later one. The
/// cost constants are parameters so that each opcode family charges its own
/// schedule values through the same branch instead of reimplementing it.
#[inline]
pub fn account_access_cost(
    tracker: &mut AccessTracker,
    address: Address,
    cold_cost: u64,
    warm_cost: u64,
) -> (bool, u64) {
    let was_cold = tracker.mark_address_warm(address);
    if was_cold {
        tracing::trace!(target: "frostvm::access", %address, cost = cold_cost, "cold account access");
    }
    (was_cold, warm_cold_cost(was_cold, cold_cost, warm_cost))
}

/// Derives the storage access charge for `(address, key)` and warms it.
///
/// Identical shape to [`account_access_cost`], keyed on the per-address
/// storage slot.
#[inline]
pub fn storage_access_cost(
    tracker: &mut AccessTracker,
    address: Address,
    key: U256,
    cold_cost: u64,
    warm_cost: u64,
) -> (bool, u64) {
    let was_cold = tracker.mark_storage_warm(address, key);
    if was_cold {
        tracing::trace!(target: "frostvm::access", %address, %key, cost = cold_cost, "cold storage access");
    }
    (was_cold, warm_cold_cost(was_cold, cold_cost, warm_cost))
}

/// Cost of a per-word charge over `len` bytes.
#[inline]
pub const fn num_words_cost(len: usize, per_word: u64) -> u64 {
    per_word.saturating_mul(crate::num_words(len as u64))
}
