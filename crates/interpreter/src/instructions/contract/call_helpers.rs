//! Shared pieces of the call-family and creation handlers.

use crate::{
    instructions::utility::IntoU256,
    interpreter_action::{CallOutcome, CreateOutcome},
    Host, InstructionResult, Interpreter,
};
use core::{cmp::min, ops::Range};
use primitives::{hardfork::SpecId, Address, Bytes, U256};

/// Pops the four memory operands shared by every call variant, charges
/// memory expansion, and returns the call data together with the memory
/// range reserved for the return data.
#[inline]
pub fn get_memory_input_and_out_ranges(interp: &mut Interpreter) -> Option<(Bytes, Range<usize>)> {
    popn!([in_offset, in_len, out_offset, out_len], interp, None);

    let in_len = as_usize_or_fail_ret!(interp, in_len, None);
    let input = if in_len != 0 {
        let in_offset = as_usize_or_fail_ret!(interp, in_offset, None);
        if !interp.resize_memory(in_offset, in_len) {
            return None;
        }
        Bytes::copy_from_slice(interp.memory.slice(in_offset, in_len))
    } else {
        Bytes::new()
    };

    let out_len = as_usize_or_fail_ret!(interp, out_len, None);
    let out_offset = if out_len != 0 {
        let out_offset = as_usize_or_fail_ret!(interp, out_offset, None);
        if !interp.resize_memory(out_offset, out_len) {
            return None;
        }
        out_offset
    } else {
        // unrealistic value so we are sure it is not used
        usize::MAX
    };

    Some((input, out_offset..out_offset.wrapping_add(out_len)))
}

/// Charges the variant-specific call costs — value transfer and, for CALL,
/// the creation of a previously-empty target — and derives the gas to
/// forward under the EIP-150 63/64 rule.
#[inline]
pub fn calc_call_gas<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    to: Address,
    transfers_value: bool,
    local_gas_limit: u64,
    charges_new_account: bool,
) -> Option<u64> {
    let mut cost = 0u64;
    if transfers_value {
        cost += interp.gas_schedule.transfer_value_cost();
    }
    if charges_new_account {
        let is_empty = host_or_fail!(interp, host.account_is_empty(to), None);
        if is_empty {
            let is_spurious_dragon = interp.spec_id.is_enabled_in(SpecId::SPURIOUS_DRAGON);
            cost += interp
                .gas_schedule
                .new_account_cost(is_spurious_dragon, transfers_value);
        }
    }
    gas!(interp, cost, None);

    // EIP-150: forward at most all-but-one-64th of what remains.
    let gas_limit = if interp.spec_id.is_enabled_in(SpecId::TANGERINE) {
        let remaining = interp.gas.remaining();
        min(remaining - remaining / 64, local_gas_limit)
    } else {
        local_gas_limit
    };
    Some(gas_limit)
}

/// Reconciles a finished sub-call with the caller frame: unspent gas and
/// refunds flow back, return data lands in the reserved memory range, and
/// the success flag is pushed.
pub fn insert_call_outcome(
    interp: &mut Interpreter,
    outcome: CallOutcome,
    memory_range: Range<usize>,
) {
    let out_len = min(memory_range.len(), outcome.output.len());
    match outcome.result {
        result if result.is_ok() => {
            interp.gas.erase_cost(outcome.gas.remaining());
            interp.gas.record_refund(outcome.gas.refunded());
            if out_len != 0 {
                interp
                    .memory
                    .set(memory_range.start, &outcome.output[..out_len]);
            }
            interp.return_data = outcome.output;
            push!(interp, U256::from(1));
        }
        result if result.is_revert() => {
            // gas comes back, refunds do not
            interp.gas.erase_cost(outcome.gas.remaining());
            if out_len != 0 {
                interp
                    .memory
                    .set(memory_range.start, &outcome.output[..out_len]);
            }
            interp.return_data = outcome.output;
            push!(interp, U256::ZERO);
        }
        InstructionResult::FatalExternalError => {
            interp.instruction_result = InstructionResult::FatalExternalError;
        }
        _ => {
            interp.return_data = Bytes::new();
            push!(interp, U256::ZERO);
        }
    }
}

/// Reconciles a finished creation: the created address is pushed on
/// success, zero otherwise.
pub fn insert_create_outcome(interp: &mut Interpreter, outcome: CreateOutcome) {
    interp.return_data = Bytes::new();
    match outcome.result {
        result if result.is_ok() => {
            interp.gas.erase_cost(outcome.gas.remaining());
            interp.gas.record_refund(outcome.gas.refunded());
            let address = outcome.address.unwrap_or_default();
            push!(interp, address.into_u256());
        }
        result if result.is_revert() => {
            interp.return_data = outcome.output;
            interp.gas.erase_cost(outcome.gas.remaining());
            push!(interp, U256::ZERO);
        }
        InstructionResult::FatalExternalError => {
            interp.instruction_result = InstructionResult::FatalExternalError;
        }
        _ => {
            push!(interp, U256::ZERO);
        }
    }
}
