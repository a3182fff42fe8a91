//! The interpreter frame and its fetch-execute loop.

mod contract;
mod memory;
mod stack;

pub use contract::Contract;
pub use memory::Memory;
pub use stack::Stack;

use crate::{
    gas::{Gas, GasSchedule, MemoryExtensionResult},
    instructions::InstructionTable,
    num_words, opcode, Host, InstructionResult,
};
use primitives::{hardfork::SpecId, Bytes};

/// One call frame of the interpreter.
///
/// Gas is frame-scoped: each frame's budget is carved out of its caller's
/// remaining gas and reconciled when the frame returns. Warmth is not here —
/// it is transaction-scoped and lives behind [`Host::access_mut`].
#[derive(Clone, Debug)]
pub struct Interpreter {
    /// Frame inputs.
    pub contract: Contract,
    /// Operand stack.
    pub stack: Stack,
    /// Frame memory.
    pub memory: Memory,
    /// Frame gas meter.
    pub gas: Gas,
    /// Cost schedule of the active fork.
    pub gas_schedule: GasSchedule,
    /// The active fork.
    pub spec_id: SpecId,
    /// Whether state changes are forbidden in this frame.
    pub is_static: bool,
    /// Next instruction offset into the code.
    pub program_counter: usize,
    /// Frame status; `Continue` while the loop keeps stepping.
    pub instruction_result: InstructionResult,
    /// Output of the most recently finished sub-frame.
    pub return_data: Bytes,
}

impl Interpreter {
    /// Creates a frame for `contract` with the fork's stock schedule.
    pub fn new(contract: Contract, gas_limit: u64, spec_id: SpecId, is_static: bool) -> Self {
        Self::new_with_schedule(
            contract,
            gas_limit,
            spec_id,
            GasSchedule::new_spec(spec_id),
            is_static,
        )
    }

    /// Creates a frame with an explicit schedule (custom-chain overrides).
    pub fn new_with_schedule(
        contract: Contract,
        gas_limit: u64,
        spec_id: SpecId,
        gas_schedule: GasSchedule,
        is_static: bool,
    ) -> Self {
        Self {
            contract,
            stack: Stack::new(),
            memory: Memory::new(),
            gas: Gas::new(gas_limit),
            gas_schedule,
            spec_id,
            is_static,
            program_counter: 0,
            instruction_result: InstructionResult::Continue,
            return_data: Bytes::new(),
        }
    }

    /// Charges memory expansion up to `offset + len` bytes and grows the
    /// memory. Returns `false` and halts the frame with `MemoryOOG` when
    /// the expansion cost exceeds the remaining gas.
    #[must_use]
    pub fn resize_memory(&mut self, offset: usize, len: usize) -> bool {
        let words = num_words(offset.saturating_add(len) as u64) as usize;
        let linear = self.gas_schedule.memory_linear();
        let quadratic_div = self.gas_schedule.memory_quadratic_div();
        match self.gas.record_memory_expansion(words, linear, quadratic_div) {
            MemoryExtensionResult::Extended => {
                self.memory.resize(words * 32);
                true
            }
            MemoryExtensionResult::Same => true,
            MemoryExtensionResult::OutOfGas => {
                self.instruction_result = InstructionResult::MemoryOOG;
                false
            }
        }
    }

    /// Runs the frame against `table` until it halts, returning the final
    /// status. Running off the end of the code is a normal stop.
    pub fn run<H: Host + ?Sized>(
        &mut self,
        table: &InstructionTable<H>,
        host: &mut H,
    ) -> InstructionResult {
        while self.instruction_result == InstructionResult::Continue {
            let Some(&op) = self.contract.code.get(self.program_counter) else {
                self.instruction_result = InstructionResult::Stop;
                break;
            };
            tracing::trace!(
                target: "frostvm::interpreter",
                pc = self.program_counter,
                opcode = opcode::name(op),
                gas = self.gas.remaining(),
                "step"
            );
            self.program_counter += 1;
            table[op as usize](self, host);
        }
        self.instruction_result
    }
}
