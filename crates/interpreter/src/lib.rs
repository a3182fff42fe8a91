//! # frostvm-interpreter
//!
//! The instruction-execution core of an EVM-compatible virtual machine,
//! centered on the part that is genuinely hard to get right: charging state
//! access as a function of what the current transaction has already touched
//! (EIP-2929 warm/cold metering), consistently across every opcode family
//! that reads or writes accounts and storage, and composably across
//! hardforks.
//!
//! The crate deliberately does not contain a full EVM. The world state lives
//! behind the [`Host`] trait; the dispatch surface is an [`InstructionTable`]
//! built per fork; the [`Interpreter`] frame carries only what the in-scope
//! opcode families need (stack, memory, gas meter, contract context).
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
mod macros;

pub mod access;
pub mod gas;
mod host;
mod instruction_result;
pub mod instructions;
pub mod interpreter;
mod interpreter_action;
pub mod opcode;

pub use access::AccessTracker;
pub use gas::{Gas, GasId, GasSchedule, MemoryExtensionResult, MemoryGas, ScheduleError};
pub use host::{DummyAccount, DummyHost, Host, SStoreResult, SelfDestructResult, StorageSlot};
pub use instruction_result::InstructionResult;
pub use instructions::{apply_berlin_overrides, instruction_table, Instruction, InstructionTable};
pub use interpreter::{Contract, Interpreter, Memory, Stack};
pub use interpreter_action::{
    CallInputs, CallOutcome, CallScheme, CallValue, CreateInputs, CreateOutcome, CreateScheme,
};
pub use primitives::{CALL_STACK_LIMIT, STACK_LIMIT};

/// Number of 32-byte words required to hold `len` bytes.
#[inline]
pub const fn num_words(len: u64) -> u64 {
    len.saturating_add(31) / 32
}

#[cfg(test)]
mod num_words_tests {
    use super::num_words;

    #[test]
    fn rounds_up_to_word_granularity() {
        assert_eq!(num_words(0), 0);
        assert_eq!(num_words(1), 1);
        assert_eq!(num_words(32), 1);
        assert_eq!(num_words(33), 2);
        // saturates instead of overflowing
        assert_eq!(num_words(u64::MAX), u64::MAX / 32);
    }
}
