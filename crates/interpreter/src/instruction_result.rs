/// Status of an interpreter frame.
///
/// `Continue` means the frame keeps stepping; every other variant halts it.
/// Error variants are fatal to the current frame only — the caller frame
/// decides what a failed sub-call means for it (push zero, keep going).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstructionResult {
    // Success codes
    /// Execution should continue to the next instruction.
    #[default]
    Continue = 0x00,
    /// Encountered a `STOP` opcode or ran off the end of the code.
    Stop,
    /// Returned from the frame.
    Return,
    /// Frame ended with a `SELFDESTRUCT`.
    SelfDestruct,

    // Revert codes
    /// Frame reverted.
    Revert = 0x10,
    /// Sub-call depth limit reached.
    CallTooDeep,
    /// Caller lacks funds for the attempted value transfer.
    OutOfFund,

    // Error codes
    /// A gas charge exceeded the remaining gas.
    OutOfGas = 0x50,
    /// Memory expansion cost exceeded the remaining gas.
    MemoryOOG,
    /// An operand does not fit in a `usize`.
    InvalidOperandOOG,
    /// EIP-2200: `SSTORE` entered with gas at or below the call stipend.
    ReentrancySentryOOG,
    /// Opcode has no handler in the active fork's table.
    OpcodeNotFound,
    /// A state-changing opcode ran inside a static call.
    StateChangeDuringStaticCall,
    /// Opcode is not activated in the current fork.
    NotActivated,
    /// Not enough stack items for the instruction.
    StackUnderflow,
    /// Pushing would exceed the stack limit.
    StackOverflow,
    /// The host failed to answer a state query.
    FatalExternalError,
}

impl InstructionResult {
    /// Returns whether the result is a success.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(
            self,
            Self::Continue | Self::Stop | Self::Return | Self::SelfDestruct
        )
    }

    /// Returns whether the result is a revert.
    #[inline]
    pub const fn is_revert(self) -> bool {
        matches!(self, Self::Revert | Self::CallTooDeep | Self::OutOfFund)
    }

    /// Returns whether the result is an error.
    #[inline]
    pub const fn is_error(self) -> bool {
        !self.is_ok() && !self.is_revert()
    }
}
