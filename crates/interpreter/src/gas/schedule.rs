//! Fork-versioned gas cost schedule.

use crate::{
    gas::{self, num_words_cost, ACCESS_LIST_STORAGE_KEY, WARM_SSTORE_RESET},
    host::SStoreResult,
};
use primitives::hardfork::SpecId;
use std::sync::Arc;

/// Number of entries in the schedule table. Larger than the number of
/// defined [`GasId`]s so entries can be added without changing the layout.
pub const GAS_TABLE_SIZE: usize = 32;

/// Immutable, fork-versioned table of gas cost entries.
///
/// A fork's schedule is derived from the previous fork's values: the table
/// for `spec` is built by laying down the frontier base costs and then, for
/// each enabled fork in activation order, overwriting only the entries that
/// fork's EIPs change. Entries a fork does not mention inherit the prior
/// value by construction, which is the property consensus depends on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GasSchedule {
    table: Arc<[u64; GAS_TABLE_SIZE]>,
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self::new_spec(SpecId::default())
    }
}

impl GasSchedule {
    /// Creates a schedule from a raw table.
    #[inline]
    pub fn new(table: Arc<[u64; GAS_TABLE_SIZE]>) -> Self {
        Self { table }
    }

    /// Builds the schedule for the given fork.
    pub fn new_spec(spec: SpecId) -> Self {
        let mut table = [0; GAS_TABLE_SIZE];

        // Frontier base costs.
        table[GasId::sload().as_usize()] = 50;
        table[GasId::sstore_set().as_usize()] = gas::SSTORE_SET;
        table[GasId::sstore_reset().as_usize()] = gas::SSTORE_RESET;
        table[GasId::sstore_clears_refund().as_usize()] = gas::REFUND_SSTORE_CLEARS as u64;
        table[GasId::selfdestruct_refund().as_usize()] = gas::SELFDESTRUCT_REFUND;
        table[GasId::balance().as_usize()] = 20;
        table[GasId::extcode().as_usize()] = 20;
        table[GasId::extcodehash().as_usize()] = 400;
        table[GasId::call_base().as_usize()] = 40;
        table[GasId::selfdestruct_base().as_usize()] = 0;
        table[GasId::selfdestruct_new_account().as_usize()] = 0;
        table[GasId::new_account().as_usize()] = gas::NEWACCOUNT;
        table[GasId::transfer_value().as_usize()] = gas::CALLVALUE;
        table[GasId::call_stipend().as_usize()] = gas::CALL_STIPEND;
        table[GasId::cold_sload().as_usize()] = 0;
        table[GasId::cold_account_access().as_usize()] = 0;
        table[GasId::warm_storage_read().as_usize()] = 0;
        table[GasId::copy_word().as_usize()] = gas::COPY;
        table[GasId::keccak256_word().as_usize()] = gas::KECCAK256WORD;
        table[GasId::create().as_usize()] = gas::CREATE;
        table[GasId::memory_linear().as_usize()] = gas::MEMORY;
        table[GasId::memory_quadratic_div().as_usize()] = gas::MEMORY_QUADRATIC_DIV;

        if spec.is_enabled_in(SpecId::TANGERINE) {
            // EIP-150: Gas cost changes for IO-heavy operations
            table[GasId::sload().as_usize()] = 200;
            table[GasId::balance().as_usize()] = 400;
            table[GasId::extcode().as_usize()] = 700;
            table[GasId::call_base().as_usize()] = 700;
            table[GasId::selfdestruct_base().as_usize()] = 5000;
            table[GasId::selfdestruct_new_account().as_usize()] = gas::NEWACCOUNT;
        }

        if spec.is_enabled_in(SpecId::ISTANBUL) {
            // EIP-1884: Repricing for trie-size-dependent opcodes
            table[GasId::sload().as_usize()] = gas::ISTANBUL_SLOAD_GAS;
            table[GasId::balance().as_usize()] = 700;
            table[GasId::extcodehash().as_usize()] = 700;
        }

        if spec.is_enabled_in(SpecId::BERLIN) {
            // EIP-2929: Gas cost increases for state access opcodes
            table[GasId::sload().as_usize()] = gas::WARM_STORAGE_READ_COST;
            table[GasId::sstore_reset().as_usize()] = gas::SSTORE_RESET - gas::COLD_SLOAD_COST;
            table[GasId::cold_sload().as_usize()] = gas::COLD_SLOAD_COST;
            table[GasId::cold_account_access().as_usize()] = gas::COLD_ACCOUNT_ACCESS_COST;
            table[GasId::warm_storage_read().as_usize()] = gas::WARM_STORAGE_READ_COST;
        }

        if spec.is_enabled_in(SpecId::LONDON) {
            // EIP-3529: Reduction in refunds
            table[GasId::sstore_clears_refund().as_usize()] =
                WARM_SSTORE_RESET + ACCESS_LIST_STORAGE_KEY;
            table[GasId::selfdestruct_refund().as_usize()] = 0;
        }

        Self::new(Arc::new(table))
    }

    /// Returns the raw table.
    #[inline]
    pub fn table(&self) -> &[u64; GAS_TABLE_SIZE] {
        &self.table
    }

    /// Gets the cost for the given id.
    #[inline]
    pub fn get(&self, id: GasId) -> u64 {
        self.table[id.as_usize()]
    }

    /// Overrides individual entries, cloning the underlying table.
    ///
    /// This is the value-level "copy then override named fields" operation
    /// the fork derivation is built on; custom chains use it to tweak a
    /// stock schedule without re-specifying it.
    pub fn override_gas(&mut self, values: impl IntoIterator<Item = (GasId, u64)>) {
        let mut table = *self.table;
        for (id, value) in values {
            table[id.as_usize()] = value;
        }
        *self = Self::new(Arc::new(table));
    }

    /// Overrides entries by name, failing on any name that does not map to a
    /// real entry.
    ///
    /// A typo'd override key is a construction-time error, never a silent
    /// no-op.
    pub fn override_named(&mut self, values: &[(&str, u64)]) -> Result<(), ScheduleError> {
        let mut resolved = Vec::with_capacity(values.len());
        for (entry_name, value) in values {
            let id = GasId::from_name(entry_name)
                .ok_or_else(|| ScheduleError::UnknownEntry((*entry_name).into()))?;
            resolved.push((id, *value));
        }
        self.override_gas(resolved);
        Ok(())
    }

    /// Static SLOAD cost (the warm read cost from Berlin on).
    #[inline]
    pub fn sload_gas(&self) -> u64 {
        self.get(GasId::sload())
    }

    /// Flat BALANCE cost charged before Berlin.
    #[inline]
    pub fn balance_gas(&self) -> u64 {
        self.get(GasId::balance())
    }

    /// Flat EXTCODESIZE/EXTCODECOPY base cost charged before Berlin.
    #[inline]
    pub fn extcode_gas(&self) -> u64 {
        self.get(GasId::extcode())
    }

    /// Flat EXTCODEHASH cost charged before Berlin.
    #[inline]
    pub fn extcodehash_gas(&self) -> u64 {
        self.get(GasId::extcodehash())
    }

    /// Flat call-family account access cost charged before Berlin.
    #[inline]
    pub fn call_base_gas(&self) -> u64 {
        self.get(GasId::call_base())
    }

    /// SELFDESTRUCT base cost.
    #[inline]
    pub fn selfdestruct_gas(&self) -> u64 {
        self.get(GasId::selfdestruct_base())
    }

    /// Account-creation surcharge when SELFDESTRUCT sends to a new account.
    #[inline]
    pub fn selfdestruct_new_account_cost(&self) -> u64 {
        self.get(GasId::selfdestruct_new_account())
    }

    /// SELFDESTRUCT refund, zero from London on.
    #[inline]
    pub fn selfdestruct_refund(&self) -> i64 {
        self.get(GasId::selfdestruct_refund()) as i64
    }

    /// SELFDESTRUCT cost given the EIP-161 topup decision.
    ///
    /// The cold beneficiary surcharge is not part of this: it is charged
    /// (cold-only, no warm counterpart) by the EIP-2929 handler before the
    /// prior-fork semantics run.
    #[inline]
    pub fn selfdestruct_cost(&self, should_charge_topup: bool) -> u64 {
        let mut cost = self.selfdestruct_gas();
        if should_charge_topup {
            cost += self.selfdestruct_new_account_cost();
        }
        cost
    }

    /// Cost of creating a touched-empty account through a value transfer.
    ///
    /// EIP-161 (Spurious Dragon) made the charge conditional on an actual
    /// transfer; before it, calling any non-existent account paid it.
    #[inline]
    pub fn new_account_cost(&self, is_spurious_dragon: bool, transfers_value: bool) -> u64 {
        if !is_spurious_dragon || transfers_value {
            return self.get(GasId::new_account());
        }
        0
    }

    /// Surcharge for transferring value with a call.
    #[inline]
    pub fn transfer_value_cost(&self) -> u64 {
        self.get(GasId::transfer_value())
    }

    /// Stipend granted to the recipient of a value-transferring call.
    #[inline]
    pub fn call_stipend(&self) -> u64 {
        self.get(GasId::call_stipend())
    }

    /// Cold storage slot access cost, zero before Berlin.
    #[inline]
    pub fn cold_sload_cost(&self) -> u64 {
        self.get(GasId::cold_sload())
    }

    /// Cold account access cost, zero before Berlin.
    #[inline]
    pub fn cold_account_access_cost(&self) -> u64 {
        self.get(GasId::cold_account_access())
    }

    /// Warm access cost, zero before Berlin.
    #[inline]
    pub fn warm_storage_read_cost(&self) -> u64 {
        self.get(GasId::warm_storage_read())
    }

    /// CREATE base cost.
    #[inline]
    pub fn create_gas(&self) -> u64 {
        self.get(GasId::create())
    }

    /// Per-word copy cost for `len` bytes.
    #[inline]
    pub fn copy_cost(&self, len: usize) -> u64 {
        num_words_cost(len, self.get(GasId::copy_word()))
    }

    /// Per-word hashing cost for `len` bytes of CREATE2 init code.
    #[inline]
    pub fn keccak256_cost(&self, len: usize) -> u64 {
        num_words_cost(len, self.get(GasId::keccak256_word()))
    }

    /// Linear coefficient of the memory expansion cost.
    #[inline]
    pub fn memory_linear(&self) -> u64 {
        self.get(GasId::memory_linear())
    }

    /// Divisor of the quadratic memory expansion term.
    #[inline]
    pub fn memory_quadratic_div(&self) -> u64 {
        self.get(GasId::memory_quadratic_div())
    }

    /// Net-metered SSTORE cost.
    ///
    /// This is the prior-fork collaborator for the Berlin SSTORE handler: it
    /// prices the clean/dirty value transition (EIP-2200 from Istanbul, the
    /// set/reset rule before) and knows nothing about warmth. The Berlin
    /// schedule feeds it the warm read cost as `sload` and the
    /// cold-load-free reset cost as `sstore_reset`, which is all EIP-2929
    /// changes about it.
    pub fn sstore_cost(&self, is_istanbul: bool, vals: &SStoreResult) -> u64 {
        if !is_istanbul {
            // Frontier rule: setting a zero slot pays SET, anything else RESET.
            return if vals.is_present_zero() && !vals.is_new_zero() {
                self.get(GasId::sstore_set())
            } else {
                self.get(GasId::sstore_reset())
            };
        }

        if vals.is_new_eq_present() {
            self.sload_gas()
        } else if vals.is_original_eq_present() && vals.is_original_zero() {
            self.get(GasId::sstore_set())
        } else if vals.is_original_eq_present() {
            self.get(GasId::sstore_reset())
        } else {
            self.sload_gas()
        }
    }

    /// Net-metered SSTORE refund.
    pub fn sstore_refund(&self, is_istanbul: bool, vals: &SStoreResult) -> i64 {
        let clears_refund = self.get(GasId::sstore_clears_refund()) as i64;

        if !is_istanbul {
            // Before net metering, clearing always refunded without looking
            // at the original value.
            if !vals.is_present_zero() && vals.is_new_zero() {
                return clears_refund;
            }
            return 0;
        }

        // No-op writes refund nothing.
        if vals.is_new_eq_present() {
            return 0;
        }

        // Clean clear of a live slot.
        if vals.is_original_eq_present() && vals.is_new_zero() {
            return clears_refund;
        }

        let mut refund = 0;
        if !vals.is_original_zero() {
            if vals.is_present_zero() {
                refund -= clears_refund;
            } else if vals.is_new_zero() {
                refund += clears_refund;
            }
        }

        // Restoring the original value refunds the difference against the
        // charge the dirty write already paid.
        if vals.is_original_eq_new() {
            refund += if vals.is_original_zero() {
                (self.get(GasId::sstore_set()) - self.sload_gas()) as i64
            } else {
                (self.get(GasId::sstore_reset()) - self.sload_gas()) as i64
            };
        }
        refund
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Arc, GasSchedule, GAS_TABLE_SIZE};

    #[derive(serde::Serialize, serde::Deserialize)]
    struct GasScheduleSerde {
        table: Vec<u64>,
    }

    impl serde::Serialize for GasSchedule {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            GasScheduleSerde {
                table: self.table.to_vec(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for GasSchedule {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let raw = GasScheduleSerde::deserialize(deserializer)?;
            let table: [u64; GAS_TABLE_SIZE] = raw
                .table
                .try_into()
                .map_err(|_| serde::de::Error::custom("invalid gas schedule length"))?;
            Ok(Self::new(Arc::new(table)))
        }
    }
}

/// Construction-time schedule errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// An override named an entry that does not exist in the schedule.
    #[error("unknown gas schedule entry: {0}")]
    UnknownEntry(String),
}

/// Typed index into the [`GasSchedule`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GasId(u8);

impl GasId {
    /// Creates a new `GasId` with the given raw id.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Returns the raw id as a table index.
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Static SLOAD cost.
    pub const fn sload() -> GasId {
        Self::new(1)
    }

    /// SSTORE cost for setting a zero slot to non-zero.
    pub const fn sstore_set() -> GasId {
        Self::new(2)
    }

    /// SSTORE cost for resetting a non-zero slot.
    pub const fn sstore_reset() -> GasId {
        Self::new(3)
    }

    /// Refund for clearing a storage slot.
    pub const fn sstore_clears_refund() -> GasId {
        Self::new(4)
    }

    /// SELFDESTRUCT refund.
    pub const fn selfdestruct_refund() -> GasId {
        Self::new(5)
    }

    /// Flat BALANCE cost.
    pub const fn balance() -> GasId {
        Self::new(6)
    }

    /// Flat EXTCODESIZE/EXTCODECOPY base cost.
    pub const fn extcode() -> GasId {
        Self::new(7)
    }

    /// Flat EXTCODEHASH cost.
    pub const fn extcodehash() -> GasId {
        Self::new(8)
    }

    /// Flat call-family account access cost.
    pub const fn call_base() -> GasId {
        Self::new(9)
    }

    /// SELFDESTRUCT base cost.
    pub const fn selfdestruct_base() -> GasId {
        Self::new(10)
    }

    /// SELFDESTRUCT new-account surcharge.
    pub const fn selfdestruct_new_account() -> GasId {
        Self::new(11)
    }

    /// Call new-account surcharge.
    pub const fn new_account() -> GasId {
        Self::new(12)
    }

    /// Value-transfer surcharge.
    pub const fn transfer_value() -> GasId {
        Self::new(13)
    }

    /// Value-transfer stipend.
    pub const fn call_stipend() -> GasId {
        Self::new(14)
    }

    /// Cold storage slot access cost.
    pub const fn cold_sload() -> GasId {
        Self::new(15)
    }

    /// Cold account access cost.
    pub const fn cold_account_access() -> GasId {
        Self::new(16)
    }

    /// Warm access cost.
    pub const fn warm_storage_read() -> GasId {
        Self::new(17)
    }

    /// Per-word copy cost.
    pub const fn copy_word() -> GasId {
        Self::new(18)
    }

    /// Per-word KECCAK256 cost.
    pub const fn keccak256_word() -> GasId {
        Self::new(19)
    }

    /// CREATE base cost.
    pub const fn create() -> GasId {
        Self::new(20)
    }

    /// Linear memory expansion coefficient.
    pub const fn memory_linear() -> GasId {
        Self::new(21)
    }

    /// Quadratic memory expansion divisor.
    pub const fn memory_quadratic_div() -> GasId {
        Self::new(22)
    }

    /// Returns the name of the entry, or `"unknown"` for ids outside the
    /// defined set.
    pub const fn name(&self) -> &'static str {
        match self.0 {
            x if x == Self::sload().as_u8() => "sload",
            x if x == Self::sstore_set().as_u8() => "sstore_set",
            x if x == Self::sstore_reset().as_u8() => "sstore_reset",
            x if x == Self::sstore_clears_refund().as_u8() => "sstore_clears_refund",
            x if x == Self::selfdestruct_refund().as_u8() => "selfdestruct_refund",
            x if x == Self::balance().as_u8() => "balance",
            x if x == Self::extcode().as_u8() => "extcode",
            x if x == Self::extcodehash().as_u8() => "extcodehash",
            x if x == Self::call_base().as_u8() => "call_base",
            x if x == Self::selfdestruct_base().as_u8() => "selfdestruct_base",
            x if x == Self::selfdestruct_new_account().as_u8() => "selfdestruct_new_account",
            x if x == Self::new_account().as_u8() => "new_account",
            x if x == Self::transfer_value().as_u8() => "transfer_value",
            x if x == Self::call_stipend().as_u8() => "call_stipend",
            x if x == Self::cold_sload().as_u8() => "cold_sload",
            x if x == Self::cold_account_access().as_u8() => "cold_account_access",
            x if x == Self::warm_storage_read().as_u8() => "warm_storage_read",
            x if x == Self::copy_word().as_u8() => "copy_word",
            x if x == Self::keccak256_word().as_u8() => "keccak256_word",
            x if x == Self::create().as_u8() => "create",
            x if x == Self::memory_linear().as_u8() => "memory_linear",
            x if x == Self::memory_quadratic_div().as_u8() => "memory_quadratic_div",
            _ => "unknown",
        }
    }

    /// Resolves an entry by name. Returns `None` for names that do not map
    /// to a defined entry.
    pub fn from_name(s: &str) -> Option<GasId> {
        match s {
            "sload" => Some(Self::sload()),
            "sstore_set" => Some(Self::sstore_set()),
            "sstore_reset" => Some(Self::sstore_reset()),
            "sstore_clears_refund" => Some(Self::sstore_clears_refund()),
            "selfdestruct_refund" => Some(Self::selfdestruct_refund()),
            "balance" => Some(Self::balance()),
            "extcode" => Some(Self::extcode()),
            "extcodehash" => Some(Self::extcodehash()),
            "call_base" => Some(Self::call_base()),
            "selfdestruct_base" => Some(Self::selfdestruct_base()),
            "selfdestruct_new_account" => Some(Self::selfdestruct_new_account()),
            "new_account" => Some(Self::new_account()),
            "transfer_value" => Some(Self::transfer_value()),
            "call_stipend" => Some(Self::call_stipend()),
            "cold_sload" => Some(Self::cold_sload()),
            "cold_account_access" => Some(Self::cold_account_access()),
            "warm_storage_read" => Some(Self::warm_storage_read()),
            "copy_word" => Some(Self::copy_word()),
            "keccak256_word" => Some(Self::keccak256_word()),
            "create" => Some(Self::create()),
            "memory_linear" => Some(Self::memory_linear()),
            "memory_quadratic_div" => Some(Self::memory_quadratic_div()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::U256;
    use std::collections::HashSet;

    #[test]
    fn berlin_inherits_everything_it_does_not_override() {
        let istanbul = GasSchedule::new_spec(SpecId::ISTANBUL);
        let berlin = GasSchedule::new_spec(SpecId::BERLIN);

        let overridden: HashSet<usize> = [
            GasId::sload().as_usize(),
            GasId::sstore_reset().as_usize(),
            GasId::cold_sload().as_usize(),
            GasId::cold_account_access().as_usize(),
            GasId::warm_storage_read().as_usize(),
        ]
        .into();

        for i in 0..GAS_TABLE_SIZE {
            if overridden.contains(&i) {
                continue;
            }
            assert_eq!(
                istanbul.table()[i],
                berlin.table()[i],
                "entry {} ({}) must be inherited unchanged",
                i,
                GasId::new(i as u8).name()
            );
        }
    }

    #[test]
    fn berlin_overrides_match_eip2929() {
        let berlin = GasSchedule::new_spec(SpecId::BERLIN);
        assert_eq!(berlin.sload_gas(), 100);
        // derived, not re-specified: reset minus the now-separate cold load
        assert_eq!(berlin.get(GasId::sstore_reset()), 5000 - 2100);
        assert_eq!(berlin.cold_sload_cost(), 2100);
        assert_eq!(berlin.cold_account_access_cost(), 2600);
        assert_eq!(berlin.warm_storage_read_cost(), 100);
    }

    #[test]
    fn pre_berlin_cold_entries_are_zero() {
        let istanbul = GasSchedule::new_spec(SpecId::ISTANBUL);
        assert_eq!(istanbul.cold_sload_cost(), 0);
        assert_eq!(istanbul.cold_account_access_cost(), 0);
        assert_eq!(istanbul.warm_storage_read_cost(), 0);
        assert_eq!(istanbul.sload_gas(), 800);
    }

    #[test]
    fn london_reduces_refunds() {
        let berlin = GasSchedule::new_spec(SpecId::BERLIN);
        let london = GasSchedule::new_spec(SpecId::LONDON);
        assert_eq!(berlin.get(GasId::sstore_clears_refund()), 15000);
        assert_eq!(london.get(GasId::sstore_clears_refund()), 4800);
        assert_eq!(berlin.selfdestruct_refund(), 24000);
        assert_eq!(london.selfdestruct_refund(), 0);
    }

    #[test]
    fn override_gas_changes_only_named_entries() {
        let mut schedule = GasSchedule::new_spec(SpecId::BERLIN);
        let before = *schedule.table();
        schedule.override_gas([(GasId::create(), 40000)]);
        assert_eq!(schedule.create_gas(), 40000);
        for i in 0..GAS_TABLE_SIZE {
            if i != GasId::create().as_usize() {
                assert_eq!(schedule.table()[i], before[i]);
            }
        }
    }

    #[test]
    fn override_named_rejects_unknown_entries() {
        let mut schedule = GasSchedule::new_spec(SpecId::BERLIN);
        let before = schedule.clone();
        let err = schedule
            .override_named(&[("sload", 42), ("sloda", 42)])
            .unwrap_err();
        assert_eq!(err, ScheduleError::UnknownEntry("sloda".into()));
        // nothing is applied when any key is bad
        assert_eq!(schedule, before);

        schedule.override_named(&[("sload", 42)]).unwrap();
        assert_eq!(schedule.sload_gas(), 42);
    }

    #[test]
    fn gas_id_name_round_trip() {
        let mut named = 0;
        for i in 0..=255u8 {
            let id = GasId::new(i);
            if id.name() == "unknown" {
                continue;
            }
            named += 1;
            assert_eq!(GasId::from_name(id.name()), Some(id));
        }
        assert_eq!(named, 22);
    }

    #[test]
    fn sstore_no_op_costs_a_read() {
        let berlin = GasSchedule::new_spec(SpecId::BERLIN);
        let vals = SStoreResult {
            original_value: U256::from(1),
            present_value: U256::from(1),
            new_value: U256::from(1),
        };
        assert_eq!(berlin.sstore_cost(true, &vals), 100);
        assert_eq!(berlin.sstore_refund(true, &vals), 0);
    }

    #[test]
    fn sstore_clear_refunds() {
        let berlin = GasSchedule::new_spec(SpecId::BERLIN);
        let vals = SStoreResult {
            original_value: U256::from(7),
            present_value: U256::from(7),
            new_value: U256::ZERO,
        };
        assert_eq!(berlin.sstore_cost(true, &vals), 2900);
        assert_eq!(berlin.sstore_refund(true, &vals), 15000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let schedule = GasSchedule::new_spec(SpecId::LONDON);
        let json = serde_json::to_string(&schedule).unwrap();
        let back: GasSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }
}
