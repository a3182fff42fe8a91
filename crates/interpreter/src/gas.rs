//! EVM gas metering.

pub mod calc;
pub mod constants;
pub mod schedule;

pub use calc::{account_access_cost, num_words_cost, storage_access_cost, warm_cold_cost};
pub use constants::*;
pub use schedule::{GasId, GasSchedule, ScheduleError};

/// The gas meter for one call frame.
///
/// Costs are applied atomically: [`Gas::record_cost`] either charges the
/// full amount or charges nothing and reports failure. There are no
/// partial-charge states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gas {
    /// The initial gas limit. Constant throughout execution.
    limit: u64,
    /// The remaining gas.
    remaining: u64,
    /// Refunded gas. Only applied at the end of the transaction.
    refunded: i64,
    /// Memoisation of values for memory expansion cost.
    memory: MemoryGas,
}

impl Gas {
    /// Creates a new `Gas` struct with the given gas limit.
    #[inline]
    pub const fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: limit,
            refunded: 0,
            memory: MemoryGas::new(),
        }
    }

    /// Creates a new `Gas` struct with the given gas limit, but with all gas
    /// already spent.
    #[inline]
    pub const fn new_spent(limit: u64) -> Self {
        Self {
            limit,
            remaining: 0,
            refunded: 0,
            memory: MemoryGas::new(),
        }
    }

    /// Returns the gas limit.
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the amount of gas remaining.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns the total amount of gas spent.
    #[inline]
    pub const fn spent(&self) -> u64 {
        self.limit - self.remaining
    }

    /// Returns the total amount of gas refunded.
    #[inline]
    pub const fn refunded(&self) -> i64 {
        self.refunded
    }

    /// Returns the memory expansion bookkeeping.
    #[inline]
    pub const fn memory(&self) -> &MemoryGas {
        &self.memory
    }

    /// Spends all remaining gas.
    #[inline]
    pub fn spend_all(&mut self) {
        self.remaining = 0;
    }

    /// Returns gas from a finished child frame.
    #[inline]
    pub fn erase_cost(&mut self, returned: u64) {
        self.remaining += returned;
    }

    /// Records a refund value.
    ///
    /// `refund` can be negative but the accumulated value is expected to be
    /// positive by the end of the transaction.
    #[inline]
    pub fn record_refund(&mut self, refund: i64) {
        self.refunded += refund;
    }

    /// Caps the refund for final accounting.
    ///
    /// EIP-3529 (London) lowered the cap from half of the spent gas to a
    /// fifth.
    #[inline]
    pub fn set_final_refund(&mut self, is_london: bool) {
        let max_refund_quotient = if is_london { 5 } else { 2 };
        self.refunded = (self.refunded as u64).min(self.spent() / max_refund_quotient) as i64;
    }

    /// Records a gas cost.
    ///
    /// Returns `false` without charging anything if `cost` exceeds the
    /// remaining gas.
    #[inline]
    #[must_use = "prefer using `gas!` instead to return an out-of-gas error on failure"]
    pub fn record_cost(&mut self, cost: u64) -> bool {
        if let Some(new_remaining) = self.remaining.checked_sub(cost) {
            self.remaining = new_remaining;
            return true;
        }
        false
    }

    /// Records a memory expansion to `num_words` words, charging the cost
    /// difference against the remaining gas.
    #[inline]
    pub fn record_memory_expansion(
        &mut self,
        num_words: usize,
        linear_cost: u64,
        quadratic_div: u64,
    ) -> MemoryExtensionResult {
        let Some(additional) = self
            .memory
            .record_new_len(num_words, linear_cost, quadratic_div)
        else {
            return MemoryExtensionResult::Same;
        };
        if !self.record_cost(additional) {
            return MemoryExtensionResult::OutOfGas;
        }
        MemoryExtensionResult::Extended
    }
}

/// Result of attempting to extend memory during execution.
#[derive(Debug)]
pub enum MemoryExtensionResult {
    /// Memory was extended.
    Extended,
    /// Memory size stayed the same.
    Same,
    /// Not enough gas to extend memory.
    OutOfGas,
}

/// Memoises the current memory word count and its total expansion cost, so
/// that growing memory only charges the difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryGas {
    /// Current memory length in words.
    pub words_num: usize,
    /// Total expansion cost charged so far.
    pub expansion_cost: u64,
}

impl MemoryGas {
    /// Creates a new `MemoryGas` with zero memory allocated.
    #[inline]
    pub const fn new() -> Self {
        Self {
            words_num: 0,
            expansion_cost: 0,
        }
    }

    /// Records a new memory length and returns the additional cost if memory
    /// grew, or `None` if no expansion is needed.
    #[inline]
    pub fn record_new_len(
        &mut self,
        new_num: usize,
        linear_cost: u64,
        quadratic_div: u64,
    ) -> Option<u64> {
        if new_num <= self.words_num {
            return None;
        }
        self.words_num = new_num;
        let mut cost = memory_gas(new_num, linear_cost, quadratic_div);
        core::mem::swap(&mut self.expansion_cost, &mut cost);
        // Safe to subtract: cost is monotone in the word count.
        Some(self.expansion_cost - cost)
    }
}

/// Memory expansion cost for a given number of words.
#[inline]
pub const fn memory_gas(num_words: usize, linear_cost: u64, quadratic_div: u64) -> u64 {
    let num_words = num_words as u64;
    linear_cost
        .saturating_mul(num_words)
        .saturating_add(num_words.saturating_mul(num_words) / quadratic_div)
}
