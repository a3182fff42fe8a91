//! Inputs and outcomes for the frame-spawning opcodes (the four call
//! variants and CREATE/CREATE2). These cross the boundary to the host,
//! which owns frame recursion.

use crate::{Gas, InstructionResult};
use primitives::{Address, Bytes, U256};

/// Call scheme, one per call-family opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallScheme {
    /// `CALL`.
    Call,
    /// `CALLCODE`: callee code runs with the caller's storage, value goes to
    /// the caller itself.
    CallCode,
    /// `DELEGATECALL`: callee code runs with the caller's storage, caller,
    /// and apparent value.
    DelegateCall,
    /// `STATICCALL`: like `CALL` but the sub-frame cannot change state.
    StaticCall,
}

impl CallScheme {
    /// Returns true for the delegating schemes that keep the caller's
    /// context.
    #[inline]
    pub const fn is_delegate(&self) -> bool {
        matches!(self, Self::CallCode | Self::DelegateCall)
    }
}

/// Value carried by a call: an actual transfer or an apparent (delegated)
/// value that is only observable, never moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallValue {
    /// Concrete value that moves from caller to target.
    Transfer(U256),
    /// Value the frame reports without any transfer (DELEGATECALL).
    Apparent(U256),
}

impl Default for CallValue {
    fn default() -> Self {
        Self::Transfer(U256::ZERO)
    }
}

impl CallValue {
    /// Returns the value, transferred or apparent.
    #[inline]
    pub const fn get(&self) -> U256 {
        match self {
            Self::Transfer(value) | Self::Apparent(value) => *value,
        }
    }

    /// Returns the transferred value, if any.
    #[inline]
    pub const fn transfer(&self) -> Option<U256> {
        match self {
            Self::Transfer(value) => Some(*value),
            Self::Apparent(_) => None,
        }
    }

    /// Returns whether the call moves a non-zero value.
    #[inline]
    pub fn transfers_value(&self) -> bool {
        matches!(self, Self::Transfer(value) if !value.is_zero())
    }
}

/// Inputs for a sub-call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallInputs {
    /// Call data.
    pub input: Bytes,
    /// Gas limit of the sub-frame, stipend included.
    pub gas_limit: u64,
    /// Address whose code runs, warmed and fetched by the shared
    /// load-code step before these inputs are built.
    pub bytecode_address: Address,
    /// The fetched code itself.
    pub code: Bytes,
    /// Address whose storage (and balance) the sub-frame operates on.
    pub target_address: Address,
    /// Caller as seen by the sub-frame.
    pub caller: Address,
    /// Call value.
    pub value: CallValue,
    /// The opcode this call originated from.
    pub scheme: CallScheme,
    /// Whether the sub-frame is static.
    pub is_static: bool,
}

/// Outcome of a finished sub-call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallOutcome {
    /// How the sub-frame halted.
    pub result: InstructionResult,
    /// The sub-frame's gas meter; unspent gas flows back to the caller.
    pub gas: Gas,
    /// Return data.
    pub output: Bytes,
}

/// Create scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreateScheme {
    /// `CREATE`: address derived from creator and nonce.
    Create,
    /// `CREATE2`: address derived from creator, salt, and init-code hash.
    Create2 {
        /// The CREATE2 salt.
        salt: U256,
    },
}

/// Inputs for a contract creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateInputs {
    /// The creator.
    pub caller: Address,
    /// The address derivation scheme.
    pub scheme: CreateScheme,
    /// Endowment.
    pub value: U256,
    /// Init code.
    pub init_code: Bytes,
    /// Gas limit of the init frame.
    pub gas_limit: u64,
}

/// Outcome of a finished creation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateOutcome {
    /// How the init frame halted.
    pub result: InstructionResult,
    /// The created address on success.
    pub address: Option<Address>,
    /// The init frame's gas meter.
    pub gas: Gas,
    /// Revert data, if any.
    pub output: Bytes,
}
