//! The boundary to the world state and to the frame-spawning collaborators.

mod dummy;

pub use dummy::{DummyAccount, DummyHost, StorageSlot};

use crate::{
    access::AccessTracker,
    interpreter_action::{CallInputs, CallOutcome, CreateInputs, CreateOutcome, CreateScheme},
};
use auto_impl::auto_impl;
use primitives::{Address, Bytes, B256, U256};

/// The execution context the instruction handlers run against.
///
/// The host owns the world state view and the transaction-scoped
/// [`AccessTracker`]; handlers reach the tracker through [`Host::access_mut`]
/// so that warmth is shared across the whole nested call tree. State
/// queries return `None` when the backing database fails, which handlers
/// translate into [`FatalExternalError`](crate::InstructionResult).
///
/// [`Host::call`], [`Host::create`], and [`Host::create_address`] are the
/// prior-fork collaborators: the sub-frame semantics and the address
/// derivation rule live behind them and stay invocable as independent
/// units.
#[auto_impl(&mut, Box)]
pub trait Host {
    /// Transaction-scoped warm/cold access tracker.
    fn access_mut(&mut self) -> &mut AccessTracker;

    /// Balance of `address`.
    fn balance(&mut self, address: Address) -> Option<U256>;

    /// Code at `address`; empty bytes for codeless accounts.
    fn code(&mut self, address: Address) -> Option<Bytes>;

    /// Code hash of `address`.
    fn code_hash(&mut self, address: Address) -> Option<B256>;

    /// Whether `address` is defined-empty (no code, zero nonce, zero
    /// balance) or does not exist.
    fn account_is_empty(&mut self, address: Address) -> Option<bool>;

    /// Storage value of `address` at `key`.
    fn sload(&mut self, address: Address, key: U256) -> Option<U256>;

    /// Writes `value` to the storage of `address` at `key`, returning the
    /// original/present/new transition the net-metering rule prices.
    fn sstore(&mut self, address: Address, key: U256, value: U256) -> Option<SStoreResult>;

    /// Transfers the balance of `address` to `target` and schedules
    /// `address` for destruction.
    fn selfdestruct(&mut self, address: Address, target: Address) -> Option<SelfDestructResult>;

    /// Address a creation by `caller` would deploy to under the active
    /// fork's derivation rule. Must not change state.
    fn create_address(
        &mut self,
        caller: Address,
        scheme: CreateScheme,
        init_code: &Bytes,
    ) -> Address;

    /// Runs a sub-call frame to completion.
    fn call(&mut self, inputs: CallInputs) -> CallOutcome;

    /// Runs a creation frame to completion.
    fn create(&mut self, inputs: CreateInputs) -> CreateOutcome;
}

/// Result of a storage write: the value transitions the net-metered SSTORE
/// rule needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SStoreResult {
    /// Value of the slot when the transaction started.
    pub original_value: U256,
    /// Value of the slot before this write.
    pub present_value: U256,
    /// Value written.
    pub new_value: U256,
}

impl SStoreResult {
    /// Returns `true` if the write is a no-op.
    #[inline]
    pub fn is_new_eq_present(&self) -> bool {
        self.new_value == self.present_value
    }

    /// Returns `true` if the slot was clean before this write.
    #[inline]
    pub fn is_original_eq_present(&self) -> bool {
        self.original_value == self.present_value
    }

    /// Returns `true` if the write restores the transaction-start value.
    #[inline]
    pub fn is_original_eq_new(&self) -> bool {
        self.original_value == self.new_value
    }

    /// Returns `true` if the transaction-start value is zero.
    #[inline]
    pub fn is_original_zero(&self) -> bool {
        self.original_value.is_zero()
    }

    /// Returns `true` if the pre-write value is zero.
    #[inline]
    pub fn is_present_zero(&self) -> bool {
        self.present_value.is_zero()
    }

    /// Returns `true` if the written value is zero.
    #[inline]
    pub fn is_new_zero(&self) -> bool {
        self.new_value.is_zero()
    }
}

/// Result of a SELFDESTRUCT state operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfDestructResult {
    /// Whether the destroyed account had a balance to move.
    pub had_value: bool,
    /// Whether the beneficiary existed before the transfer.
    pub target_exists: bool,
    /// Whether the account was already scheduled for destruction in this
    /// transaction (no refund the second time).
    pub previously_destroyed: bool,
}
