//! Frame control instructions.

use crate::{Host, InstructionResult, Interpreter};

/// Implements the STOP instruction: halts the frame successfully.
pub fn stop<H: Host + ?Sized>(interp: &mut Interpreter, _host: &mut H) {
    interp.instruction_result = InstructionResult::Stop;
}

/// Handler for every opcode the active table does not implement.
pub fn unknown<H: Host + ?Sized>(interp: &mut Interpreter, _host: &mut H) {
    interp.instruction_result = InstructionResult::OpcodeNotFound;
}
