//! Instruction dispatch: one table per fork.

pub mod contract;
pub mod control;
pub mod host;
pub mod stack;
mod utility;

use crate::{opcode, Host, Interpreter};
use primitives::hardfork::SpecId;

/// EVM opcode function signature.
pub type Instruction<H> = fn(&mut Interpreter, &mut H);

/// Instruction table: function pointers for all 256 opcodes.
pub type InstructionTable<H> = [Instruction<H>; 256];

/// Builds the instruction table for `spec`.
///
/// The base table is laid down first; each later fork then overwrites
/// exactly the slots its EIPs touch. A slot no fork mentions keeps the
/// prior fork's handler by construction — the same inheritance rule the
/// gas schedule follows for its entries.
pub fn instruction_table<H: Host + ?Sized>(spec: SpecId) -> InstructionTable<H> {
    let mut table: InstructionTable<H> = [control::unknown; 256];

    table[opcode::STOP as usize] = control::stop;
    table[opcode::POP as usize] = stack::pop;
    for op in opcode::PUSH1..=opcode::PUSH32 {
        table[op as usize] = stack::push;
    }

    table[opcode::BALANCE as usize] = host::balance;
    table[opcode::EXTCODESIZE as usize] = host::extcodesize;
    table[opcode::EXTCODECOPY as usize] = host::extcodecopy;
    table[opcode::EXTCODEHASH as usize] = host::extcodehash;
    table[opcode::SLOAD as usize] = host::sload;
    table[opcode::SSTORE as usize] = host::sstore;
    table[opcode::SELFDESTRUCT as usize] = host::selfdestruct;
    table[opcode::CREATE as usize] = contract::create;
    table[opcode::CREATE2 as usize] = contract::create2;
    table[opcode::CALL as usize] = contract::call;
    table[opcode::CALLCODE as usize] = contract::call_code;
    table[opcode::DELEGATECALL as usize] = contract::delegate_call;
    table[opcode::STATICCALL as usize] = contract::static_call;

    if spec.is_enabled_in(SpecId::BERLIN) {
        apply_berlin_overrides(&mut table);
    }

    table
}

/// Installs the EIP-2929 handler variants over the slots Berlin reprices.
///
/// Everything else in the table — including the prior semantics the
/// variants delegate to — is reused untouched.
pub fn apply_berlin_overrides<H: Host + ?Sized>(table: &mut InstructionTable<H>) {
    table[opcode::BALANCE as usize] = host::balance_eip2929;
    table[opcode::EXTCODESIZE as usize] = host::extcodesize_eip2929;
    table[opcode::EXTCODECOPY as usize] = host::extcodecopy_eip2929;
    table[opcode::EXTCODEHASH as usize] = host::extcodehash_eip2929;
    table[opcode::SLOAD as usize] = host::sload_eip2929;
    table[opcode::SSTORE as usize] = host::sstore_eip2929;
    table[opcode::SELFDESTRUCT as usize] = host::selfdestruct_eip2929;
    table[opcode::CREATE as usize] = contract::create_eip2929;
    table[opcode::CREATE2 as usize] = contract::create2_eip2929;
    table[opcode::CALL as usize] = contract::call_eip2929;
    table[opcode::CALLCODE as usize] = contract::call_code_eip2929;
    table[opcode::DELEGATECALL as usize] = contract::delegate_call_eip2929;
    table[opcode::STATICCALL as usize] = contract::static_call_eip2929;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Contract, DummyHost, InstructionResult};
    use primitives::Bytes;

    #[test]
    fn unhandled_opcodes_fail_the_frame() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let table = instruction_table::<DummyHost>(SpecId::BERLIN);
        let contract = Contract {
            code: Bytes::from_static(&[0x01]), // ADD is outside this core
            ..Default::default()
        };
        let mut frame = crate::Interpreter::new(contract, 1_000, SpecId::BERLIN, false);
        assert_eq!(frame.run(&table, &mut host), InstructionResult::OpcodeNotFound);
    }

    #[test]
    fn running_off_the_code_end_stops() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let table = instruction_table::<DummyHost>(SpecId::BERLIN);
        let mut frame =
            crate::Interpreter::new(Contract::default(), 1_000, SpecId::BERLIN, false);
        assert_eq!(frame.run(&table, &mut host), InstructionResult::Stop);
        assert_eq!(frame.gas.spent(), 0);
    }
}
