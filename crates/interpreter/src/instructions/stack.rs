//! Stack manipulation instructions: the minimal driver set needed to feed
//! operands to the metered opcode families.

use crate::{gas, opcode, Host, Interpreter};
use primitives::U256;

/// Implements the POP instruction.
pub fn pop<H: Host + ?Sized>(interp: &mut Interpreter, _host: &mut H) {
    gas!(interp, gas::BASE);
    popn!([_value], interp);
}

/// Implements the PUSH1..PUSH32 instructions.
///
/// One handler serves all 32 slots: the immediate width is recovered from
/// the opcode byte the dispatch loop just consumed. Immediate bytes past
/// the end of the code read as zero.
pub fn push<H: Host + ?Sized>(interp: &mut Interpreter, _host: &mut H) {
    gas!(interp, gas::VERYLOW);
    let op = interp.contract.code[interp.program_counter - 1];
    let n = (op - opcode::PUSH1 + 1) as usize;

    let code = interp.contract.code.as_ref();
    let start = interp.program_counter;
    let available = code.len().saturating_sub(start).min(n);
    let mut word = [0u8; 32];
    word[32 - n..32 - n + available].copy_from_slice(&code[start..start + available]);

    interp.program_counter += n;
    push!(interp, U256::from_be_bytes(word));
}
