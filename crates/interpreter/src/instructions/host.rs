//! Account and storage instructions, in pre-Berlin and EIP-2929 variants.
//!
//! Every `_eip2929` handler is "charge the warm/cold access cost, then run
//! the same core the legacy handler runs". The cores know nothing about
//! warmth; the access policy is consulted in exactly one place per opcode
//! family.

use crate::{
    gas,
    instructions::utility::{IntoAddress, IntoU256},
    Host, InstructionResult, Interpreter,
};
use core::cmp::min;
use primitives::{hardfork::SpecId, Address, U256};

/// How a handler charges for touching an account: flat pre-Berlin cost or
/// the warm/cold access policy. Returns `false` when the frame ran out of
/// gas.
pub(crate) type AccountChargeFn<H> = fn(&mut Interpreter, &mut H, Address) -> bool;

/// Charges the EIP-2929 account access cost for `address`, warming it as a
/// side effect.
#[inline]
pub(crate) fn charge_account_access<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    address: Address,
) -> bool {
    let cold_cost = interp.gas_schedule.cold_account_access_cost();
    let warm_cost = interp.gas_schedule.warm_storage_read_cost();
    let (_, cost) = gas::account_access_cost(host.access_mut(), address, cold_cost, warm_cost);
    if !interp.gas.record_cost(cost) {
        interp.instruction_result = InstructionResult::OutOfGas;
        return false;
    }
    true
}

/// Charges the flat pre-Berlin EXTCODE* account cost.
#[inline]
fn charge_extcode_flat<H: Host + ?Sized>(
    interp: &mut Interpreter,
    _host: &mut H,
    _address: Address,
) -> bool {
    let cost = interp.gas_schedule.extcode_gas();
    if !interp.gas.record_cost(cost) {
        interp.instruction_result = InstructionResult::OutOfGas;
        return false;
    }
    true
}

fn push_balance<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, address: Address) {
    let balance = host_or_fail!(interp, host.balance(address));
    push!(interp, balance);
}

fn push_code_size<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, address: Address) {
    let code = host_or_fail!(interp, host.code(address));
    push!(interp, U256::from(code.len()));
}

fn push_code_hash<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, address: Address) {
    // Defined-empty accounts push a zero word, not the hash of empty code.
    let is_empty = host_or_fail!(interp, host.account_is_empty(address));
    if is_empty {
        push!(interp, U256::ZERO);
    } else {
        let hash = host_or_fail!(interp, host.code_hash(address));
        push!(interp, hash.into_u256());
    }
}

/// Implements the BALANCE instruction.
pub fn balance<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([address_word], interp);
    let address = address_word.into_address();
    gas!(interp, interp.gas_schedule.balance_gas());
    push_balance(interp, host, address);
}

/// BALANCE with the EIP-2929 access charge.
pub fn balance_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([address_word], interp);
    let address = address_word.into_address();
    if !charge_account_access(interp, host, address) {
        return;
    }
    push_balance(interp, host, address);
}

/// Implements the EXTCODESIZE instruction.
pub fn extcodesize<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([address_word], interp);
    let address = address_word.into_address();
    gas!(interp, interp.gas_schedule.extcode_gas());
    push_code_size(interp, host, address);
}

/// EXTCODESIZE with the EIP-2929 access charge.
pub fn extcodesize_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([address_word], interp);
    let address = address_word.into_address();
    if !charge_account_access(interp, host, address) {
        return;
    }
    push_code_size(interp, host, address);
}

/// EIP-1052: EXTCODEHASH opcode.
pub fn extcodehash<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    check!(interp, CONSTANTINOPLE);
    popn!([address_word], interp);
    let address = address_word.into_address();
    gas!(interp, interp.gas_schedule.extcodehash_gas());
    push_code_hash(interp, host, address);
}

/// EXTCODEHASH with the EIP-2929 access charge.
pub fn extcodehash_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([address_word], interp);
    let address = address_word.into_address();
    if !charge_account_access(interp, host, address) {
        return;
    }
    push_code_hash(interp, host, address);
}

/// EXTCODECOPY core shared by both fork variants.
///
/// Per-word copy cost and memory expansion are charged first, then the
/// account charge, then the copy itself.
fn extcodecopy_common<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    charge: AccountChargeFn<H>,
) {
    popn!([address_word, memory_offset, code_offset, len_word], interp);
    let address = address_word.into_address();
    let len = as_usize_or_fail!(interp, len_word);

    gas!(interp, interp.gas_schedule.copy_cost(len));
    let mut memory_offset_usize = 0;
    if len != 0 {
        memory_offset_usize = as_usize_or_fail!(interp, memory_offset);
        if !interp.resize_memory(memory_offset_usize, len) {
            return;
        }
    }

    if !charge(interp, host, address) {
        return;
    }

    let code = host_or_fail!(interp, host.code(address));
    let code_offset = min(as_usize_saturated!(code_offset), code.len());
    interp
        .memory
        .set_data(memory_offset_usize, code_offset, len, &code);
}

/// Implements the EXTCODECOPY instruction.
pub fn extcodecopy<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    extcodecopy_common(interp, host, charge_extcode_flat);
}

/// EXTCODECOPY with the EIP-2929 access charge.
pub fn extcodecopy_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    extcodecopy_common(interp, host, charge_account_access);
}

/// Implements the SLOAD instruction.
pub fn sload<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([key], interp);
    gas!(interp, interp.gas_schedule.sload_gas());
    let value = host_or_fail!(interp, host.sload(interp.contract.target_address, key));
    push!(interp, value);
}

/// SLOAD with the EIP-2929 storage access charge.
pub fn sload_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    popn!([key], interp);
    let target = interp.contract.target_address;
    let cold_cost = interp.gas_schedule.cold_sload_cost();
    let warm_cost = interp.gas_schedule.warm_storage_read_cost();
    let (_, cost) = gas::storage_access_cost(host.access_mut(), target, key, cold_cost, warm_cost);
    gas!(interp, cost);
    let value = host_or_fail!(interp, host.sload(target, key));
    push!(interp, value);
}

/// The prior-fork SSTORE rule: EIP-2200 reentrancy sentry plus the
/// net-metered cost and refund for the value transition. Knows nothing
/// about warmth. Returns `false` if the frame halted.
fn sstore_inner<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    key: U256,
    value: U256,
) -> bool {
    // EIP-2200: fail the frame if gas is at or below the call stipend.
    if interp.spec_id.is_enabled_in(SpecId::ISTANBUL)
        && interp.gas.remaining() <= interp.gas_schedule.call_stipend()
    {
        interp.instruction_result = InstructionResult::ReentrancySentryOOG;
        return false;
    }

    let target = interp.contract.target_address;
    let result = host_or_fail!(interp, host.sstore(target, key, value), false);

    let is_istanbul = interp.spec_id.is_enabled_in(SpecId::ISTANBUL);
    let cost = interp.gas_schedule.sstore_cost(is_istanbul, &result);
    gas!(interp, cost, false);
    interp
        .gas
        .record_refund(interp.gas_schedule.sstore_refund(is_istanbul, &result));
    true
}

/// Implements the SSTORE instruction.
pub fn sstore<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    require_non_staticcall!(interp);
    popn!([key, value], interp);
    sstore_inner(interp, host, key, value);
}

/// SSTORE with the EIP-2929 implicit-load surcharge.
///
/// The net-metered rule is charged first; if the slot had never been
/// touched in this transaction, the cold-slot cost is charged once on top,
/// because writing a slot also requires having loaded it.
pub fn sstore_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    require_non_staticcall!(interp);
    popn!([key, value], interp);
    if !sstore_inner(interp, host, key, value) {
        return;
    }
    let cold_cost = interp.gas_schedule.cold_sload_cost();
    if host
        .access_mut()
        .mark_storage_warm(interp.contract.target_address, key)
    {
        gas!(interp, cold_cost);
    }
}

/// The prior-fork SELFDESTRUCT semantics: EIP-150 base cost, EIP-161
/// new-account topup, refund bookkeeping, frame halt.
fn selfdestruct_inner<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    beneficiary: Address,
) {
    let target = interp.contract.target_address;
    let res = host_or_fail!(interp, host.selfdestruct(target, beneficiary));

    // EIP-161 narrowed the topup to transfers that actually create the
    // beneficiary.
    let should_charge_topup = if interp.spec_id.is_enabled_in(SpecId::SPURIOUS_DRAGON) {
        res.had_value && !res.target_exists
    } else {
        !res.target_exists
    };

    let cost = interp.gas_schedule.selfdestruct_cost(should_charge_topup);
    gas!(interp, cost);

    if !res.previously_destroyed {
        interp
            .gas
            .record_refund(interp.gas_schedule.selfdestruct_refund());
    }

    interp.instruction_result = InstructionResult::SelfDestruct;
}

/// Implements the SELFDESTRUCT instruction.
pub fn selfdestruct<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    require_non_staticcall!(interp);
    popn!([beneficiary], interp);
    selfdestruct_inner(interp, host, beneficiary.into_address());
}

/// SELFDESTRUCT with the EIP-2929 beneficiary charge.
///
/// Cold-only: a warm beneficiary pays nothing extra — unlike the call
/// family there is no warm constant here. Preserved protocol asymmetry.
pub fn selfdestruct_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    require_non_staticcall!(interp);
    popn!([beneficiary], interp);
    let beneficiary = beneficiary.into_address();
    let cold_cost = interp.gas_schedule.cold_account_access_cost();
    if host.access_mut().mark_address_warm(beneficiary) {
        gas!(interp, cold_cost);
    }
    selfdestruct_inner(interp, host, beneficiary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Contract, DummyAccount, DummyHost};
    use primitives::{address, keccak256, Bytes};

    const SELF: Address = address!("0x0a00000000000000000000000000000000000aa0");
    const A: Address = address!("0x0a00000000000000000000000000000000000001");
    const B: Address = address!("0x0a00000000000000000000000000000000000002");

    fn frame(spec: SpecId, gas_limit: u64) -> Interpreter {
        let contract = Contract {
            target_address: SELF,
            ..Default::default()
        };
        Interpreter::new(contract, gas_limit, spec, false)
    }

    fn push_address(interp: &mut Interpreter, address: Address) {
        assert!(interp.stack.push(address.into_u256()));
    }

    #[test]
    fn balance_charges_cold_then_warm() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_account(A, DummyAccount::with_balance(U256::from(42)));
        let mut interp = frame(SpecId::BERLIN, 100_000);

        push_address(&mut interp, A);
        balance_eip2929(&mut interp, &mut host);
        assert_eq!(interp.stack.pop(), Some(U256::from(42)));
        assert_eq!(interp.gas.spent(), 2600);

        push_address(&mut interp, A);
        balance_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 2700);
        assert!(host.access.is_address_warm(A));
    }

    #[test]
    fn balance_pre_berlin_is_flat_and_leaves_the_tracker_alone() {
        let mut host = DummyHost::new(SpecId::ISTANBUL);
        let mut interp = frame(SpecId::ISTANBUL, 100_000);

        push_address(&mut interp, A);
        balance(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 700);

        push_address(&mut interp, A);
        balance(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 1400);
        assert_eq!(host.access.warm_address_count(), 0);
    }

    #[test]
    fn balance_out_of_gas_halts_without_partial_charge() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let mut interp = frame(SpecId::BERLIN, 2_599);

        push_address(&mut interp, A);
        balance_eip2929(&mut interp, &mut host);
        assert_eq!(interp.instruction_result, InstructionResult::OutOfGas);
        // nothing was deducted by the failed charge
        assert_eq!(interp.gas.remaining(), 2_599);
        // warming still happened: the tracker is transaction state, and the
        // frame failure is the caller's problem
        assert!(host.access.is_address_warm(A));
    }

    #[test]
    fn extcodesize_and_extcodehash_share_the_account_warmth() {
        let code = Bytes::from_static(&[0x00, 0x00, 0x00]);
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_account(A, DummyAccount::with_code(code.clone()));
        let mut interp = frame(SpecId::BERLIN, 100_000);

        push_address(&mut interp, A);
        extcodesize_eip2929(&mut interp, &mut host);
        assert_eq!(interp.stack.pop(), Some(U256::from(3)));
        assert_eq!(interp.gas.spent(), 2600);

        // the address is already warm for a different opcode of the family
        push_address(&mut interp, A);
        extcodehash_eip2929(&mut interp, &mut host);
        assert_eq!(interp.stack.pop(), Some(U256::from_be_bytes(keccak256(&code).0)));
        assert_eq!(interp.gas.spent(), 2700);
    }

    #[test]
    fn extcodehash_pushes_zero_for_empty_accounts() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let mut interp = frame(SpecId::BERLIN, 100_000);

        push_address(&mut interp, B);
        extcodehash_eip2929(&mut interp, &mut host);
        assert_eq!(interp.stack.pop(), Some(U256::ZERO));
    }

    #[test]
    fn extcodecopy_charges_copy_then_access_and_zero_pads() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_account(A, DummyAccount::with_code(Bytes::from_static(&[1, 2, 3])));
        let mut interp = frame(SpecId::BERLIN, 100_000);

        // stack (top first): address, memory offset, code offset, len
        assert!(interp.stack.push(U256::from(32))); // len
        assert!(interp.stack.push(U256::ZERO)); // code offset
        assert!(interp.stack.push(U256::ZERO)); // memory offset
        push_address(&mut interp, A);
        extcodecopy_eip2929(&mut interp, &mut host);

        assert_eq!(interp.instruction_result, InstructionResult::Continue);
        // copy (1 word * 3) + memory expansion (3) + cold access (2600)
        assert_eq!(interp.gas.spent(), 3 + 3 + 2600);
        assert_eq!(interp.memory.slice(0, 4), &[1u8, 2, 3, 0][..]);
    }

    #[test]
    fn sload_storage_warmth_is_per_slot() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_storage(SELF, U256::from(1), U256::from(7));
        let mut interp = frame(SpecId::BERLIN, 100_000);

        assert!(interp.stack.push(U256::from(1)));
        sload_eip2929(&mut interp, &mut host);
        assert_eq!(interp.stack.pop(), Some(U256::from(7)));
        assert_eq!(interp.gas.spent(), 2100);

        assert!(interp.stack.push(U256::from(1)));
        sload_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 2200);

        // a different slot is cold again
        assert!(interp.stack.push(U256::from(2)));
        sload_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 2200 + 2100);
    }

    #[test]
    fn sload_pre_berlin_uses_the_schedule_cost() {
        let mut host = DummyHost::new(SpecId::ISTANBUL);
        let mut interp = frame(SpecId::ISTANBUL, 100_000);
        assert!(interp.stack.push(U256::from(1)));
        sload(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 800);
    }

    #[test]
    fn sstore_cold_slot_pays_the_implicit_load_exactly_once() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_storage(SELF, U256::from(1), U256::from(7));
        let mut interp = frame(SpecId::BERLIN, 100_000);

        // no-op write to a cold slot: warm read (100) + cold surcharge (2100)
        assert!(interp.stack.push(U256::from(7))); // value
        assert!(interp.stack.push(U256::from(1))); // key
        sstore_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 100 + 2100);

        // same write again: the slot is warm, net-metered cost only
        assert!(interp.stack.push(U256::from(7)));
        assert!(interp.stack.push(U256::from(1)));
        sstore_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 2200 + 100);
    }

    #[test]
    fn sstore_fresh_write_is_net_metered_plus_cold() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let mut interp = frame(SpecId::BERLIN, 100_000);

        // zero -> non-zero on an untouched slot: SSTORE_SET + cold
        assert!(interp.stack.push(U256::from(9))); // value
        assert!(interp.stack.push(U256::from(5))); // key
        sstore_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 20000 + 2100);
    }

    #[test]
    fn sstore_sload_warmth_is_shared() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let mut interp = frame(SpecId::BERLIN, 100_000);

        // SLOAD warms the slot...
        assert!(interp.stack.push(U256::from(5)));
        sload_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 2100);

        // ...so the write pays no surcharge
        assert!(interp.stack.push(U256::from(9)));
        assert!(interp.stack.push(U256::from(5)));
        sstore_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.spent(), 2100 + 20000);
    }

    #[test]
    fn sstore_reentrancy_sentry() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let mut interp = frame(SpecId::BERLIN, 2_300);
        assert!(interp.stack.push(U256::from(9)));
        assert!(interp.stack.push(U256::from(5)));
        sstore_eip2929(&mut interp, &mut host);
        assert_eq!(
            interp.instruction_result,
            InstructionResult::ReentrancySentryOOG
        );
    }

    #[test]
    fn sstore_refuses_static_frames() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        let contract = Contract {
            target_address: SELF,
            ..Default::default()
        };
        let mut interp = Interpreter::new(contract, 100_000, SpecId::BERLIN, true);
        assert!(interp.stack.push(U256::from(9)));
        assert!(interp.stack.push(U256::from(5)));
        sstore_eip2929(&mut interp, &mut host);
        assert_eq!(
            interp.instruction_result,
            InstructionResult::StateChangeDuringStaticCall
        );
    }

    #[test]
    fn selfdestruct_charges_cold_beneficiary_only_on_first_touch() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_account(B, DummyAccount::with_balance(U256::from(1)));
        let mut interp = frame(SpecId::BERLIN, 100_000);

        push_address(&mut interp, B);
        selfdestruct_eip2929(&mut interp, &mut host);
        assert_eq!(interp.instruction_result, InstructionResult::SelfDestruct);
        // cold (2600) + base (5000); no topup, the beneficiary exists
        assert_eq!(interp.gas.spent(), 2600 + 5000);
        assert_eq!(interp.gas.refunded(), 24000);
    }

    #[test]
    fn selfdestruct_warm_beneficiary_pays_no_extra() {
        let mut host = DummyHost::new(SpecId::BERLIN);
        host.insert_account(B, DummyAccount::with_balance(U256::from(1)));
        host.access.mark_address_warm(B);
        let mut interp = frame(SpecId::BERLIN, 100_000);

        push_address(&mut interp, B);
        selfdestruct_eip2929(&mut interp, &mut host);
        // no warm constant for this opcode, just the base cost
        assert_eq!(interp.gas.spent(), 5000);
    }

    #[test]
    fn selfdestruct_refund_is_gone_after_london() {
        let mut host = DummyHost::new(SpecId::LONDON);
        host.access.mark_address_warm(B);
        let mut interp = frame(SpecId::LONDON, 100_000);

        push_address(&mut interp, B);
        selfdestruct_eip2929(&mut interp, &mut host);
        assert_eq!(interp.gas.refunded(), 0);
    }
}
