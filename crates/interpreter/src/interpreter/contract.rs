//! Per-frame contract context.

use primitives::{Address, Bytes, U256};

/// The inputs of the frame being interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract {
    /// Address whose storage this frame operates on (and the address SLOAD
    /// and SSTORE are keyed by).
    pub target_address: Address,
    /// Caller of this frame.
    pub caller: Address,
    /// Code being executed. May belong to a different address than
    /// `target_address` for the delegating call schemes.
    pub code: Bytes,
    /// Call data.
    pub input: Bytes,
    /// Value of the frame, apparent or transferred.
    pub value: U256,
}

impl Contract {
    /// Creates a new contract context.
    pub fn new(
        target_address: Address,
        caller: Address,
        code: Bytes,
        input: Bytes,
        value: U256,
    ) -> Self {
        Self {
            target_address,
            caller,
            code,
            input,
            value,
        }
    }
}
