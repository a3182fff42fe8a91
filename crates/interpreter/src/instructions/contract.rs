//! Call-family and creation instructions.
//!
//! The call variants are composed on two axes. The variant axis is the
//! `*_impl` cores, which hold the argument shapes and value-transfer
//! semantics and never change across forks. The fork axis is the
//! [`CodeLoader`] passed into those cores: the one step that loads the code
//! about to run and charges the fork's account access rule for the code
//! source. Adding a fork that reprices account access means writing one
//! new loader — the four variant cores are reused as-is.

mod call_helpers;

pub use call_helpers::{
    calc_call_gas, get_memory_input_and_out_ranges, insert_call_outcome, insert_create_outcome,
};

use crate::{
    gas,
    instructions::utility::IntoAddress,
    interpreter_action::{
        CallInputs, CallScheme, CallValue, CreateInputs, CreateScheme,
    },
    Host, InstructionResult, Interpreter,
};
use primitives::{hardfork::SpecId, Address, Bytes, U256};

/// The fork seam of the call family: fetches the code that will run,
/// charging for the account access as a side effect. Returns `None` if the
/// frame halted.
pub type CodeLoader<H> = fn(&mut Interpreter, &mut H, Address) -> Option<Bytes>;

/// Pre-Berlin loader: flat call base cost.
pub fn load_code<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    code_source: Address,
) -> Option<Bytes> {
    let cost = interp.gas_schedule.call_base_gas();
    gas!(interp, cost, None);
    let code = host_or_fail!(interp, host.code(code_source), None);
    Some(code)
}

/// EIP-2929 loader: warm/cold account access cost, warming the code source.
pub fn load_code_eip2929<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    code_source: Address,
) -> Option<Bytes> {
    let cold_cost = interp.gas_schedule.cold_account_access_cost();
    let warm_cost = interp.gas_schedule.warm_storage_read_cost();
    let (was_cold, cost) =
        gas::account_access_cost(host.access_mut(), code_source, cold_cost, warm_cost);
    tracing::trace!(
        target: "frostvm::access",
        address = %code_source,
        was_cold,
        cost,
        "call account load"
    );
    gas!(interp, cost, None);
    let code = host_or_fail!(interp, host.code(code_source), None);
    Some(code)
}

/// Implements the CALL instruction.
pub fn call<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    call_impl(interp, host, load_code);
}

/// CALL with the EIP-2929 account load.
pub fn call_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    call_impl(interp, host, load_code_eip2929);
}

/// Implements the CALLCODE instruction.
pub fn call_code<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    call_code_impl(interp, host, load_code);
}

/// CALLCODE with the EIP-2929 account load.
pub fn call_code_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    call_code_impl(interp, host, load_code_eip2929);
}

/// Implements the DELEGATECALL instruction.
pub fn delegate_call<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    delegate_call_impl(interp, host, load_code);
}

/// DELEGATECALL with the EIP-2929 account load.
pub fn delegate_call_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    delegate_call_impl(interp, host, load_code_eip2929);
}

/// Implements the STATICCALL instruction.
pub fn static_call<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    static_call_impl(interp, host, load_code);
}

/// STATICCALL with the EIP-2929 account load.
pub fn static_call_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    static_call_impl(interp, host, load_code_eip2929);
}

fn call_impl<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, load: CodeLoader<H>) {
    popn!([local_gas_limit, to, value], interp);
    let to = to.into_address();
    let local_gas_limit = as_u64_saturated!(local_gas_limit);
    let transfers_value = !value.is_zero();
    if interp.is_static && transfers_value {
        interp.instruction_result = InstructionResult::StateChangeDuringStaticCall;
        return;
    }

    // The account load is charged before any other call-specific cost.
    let Some(code) = load(interp, host, to) else {
        return;
    };
    let Some((input, return_memory_range)) = get_memory_input_and_out_ranges(interp) else {
        return;
    };
    let Some(gas_limit) = calc_call_gas(interp, host, to, transfers_value, local_gas_limit, true)
    else {
        return;
    };
    gas!(interp, gas_limit);

    let mut callee_gas = gas_limit;
    if transfers_value {
        callee_gas += interp.gas_schedule.call_stipend();
    }

    let outcome = host.call(CallInputs {
        input,
        gas_limit: callee_gas,
        bytecode_address: to,
        code,
        target_address: to,
        caller: interp.contract.target_address,
        value: CallValue::Transfer(value),
        scheme: CallScheme::Call,
        is_static: interp.is_static,
    });
    insert_call_outcome(interp, outcome, return_memory_range);
}

fn call_code_impl<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, load: CodeLoader<H>) {
    popn!([local_gas_limit, to, value], interp);
    let to = to.into_address();
    let local_gas_limit = as_u64_saturated!(local_gas_limit);
    let transfers_value = !value.is_zero();

    let Some(code) = load(interp, host, to) else {
        return;
    };
    let Some((input, return_memory_range)) = get_memory_input_and_out_ranges(interp) else {
        return;
    };
    // Value moves to the calling account itself, so there is never a
    // new-account charge.
    let Some(gas_limit) = calc_call_gas(interp, host, to, transfers_value, local_gas_limit, false)
    else {
        return;
    };
    gas!(interp, gas_limit);

    let mut callee_gas = gas_limit;
    if transfers_value {
        callee_gas += interp.gas_schedule.call_stipend();
    }

    let outcome = host.call(CallInputs {
        input,
        gas_limit: callee_gas,
        bytecode_address: to,
        code,
        target_address: interp.contract.target_address,
        caller: interp.contract.target_address,
        value: CallValue::Transfer(value),
        scheme: CallScheme::CallCode,
        is_static: interp.is_static,
    });
    insert_call_outcome(interp, outcome, return_memory_range);
}

fn delegate_call_impl<H: Host + ?Sized>(
    interp: &mut Interpreter,
    host: &mut H,
    load: CodeLoader<H>,
) {
    check!(interp, HOMESTEAD);
    popn!([local_gas_limit, to], interp);
    let to = to.into_address();
    let local_gas_limit = as_u64_saturated!(local_gas_limit);

    let Some(code) = load(interp, host, to) else {
        return;
    };
    let Some((input, return_memory_range)) = get_memory_input_and_out_ranges(interp) else {
        return;
    };
    let Some(gas_limit) = calc_call_gas(interp, host, to, false, local_gas_limit, false) else {
        return;
    };
    gas!(interp, gas_limit);

    let outcome = host.call(CallInputs {
        input,
        gas_limit,
        bytecode_address: to,
        code,
        target_address: interp.contract.target_address,
        caller: interp.contract.caller,
        value: CallValue::Apparent(interp.contract.value),
        scheme: CallScheme::DelegateCall,
        is_static: interp.is_static,
    });
    insert_call_outcome(interp, outcome, return_memory_range);
}

fn static_call_impl<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, load: CodeLoader<H>) {
    check!(interp, BYZANTIUM);
    popn!([local_gas_limit, to], interp);
    let to = to.into_address();
    let local_gas_limit = as_u64_saturated!(local_gas_limit);

    let Some(code) = load(interp, host, to) else {
        return;
    };
    let Some((input, return_memory_range)) = get_memory_input_and_out_ranges(interp) else {
        return;
    };
    let Some(gas_limit) = calc_call_gas(interp, host, to, false, local_gas_limit, false) else {
        return;
    };
    gas!(interp, gas_limit);

    let outcome = host.call(CallInputs {
        input,
        gas_limit,
        bytecode_address: to,
        code,
        target_address: to,
        caller: interp.contract.target_address,
        value: CallValue::Transfer(U256::ZERO),
        scheme: CallScheme::StaticCall,
        is_static: true,
    });
    insert_call_outcome(interp, outcome, return_memory_range);
}

/// Pops the creation operands and charges everything up to the dispatch:
/// CREATE2 init-code hashing, memory expansion, the base cost, and the
/// EIP-150 gas forwarding.
fn prepare_create_inputs<const IS_CREATE2: bool>(interp: &mut Interpreter) -> Option<CreateInputs> {
    require_non_staticcall!(interp, None);

    let (value, code_offset, len_word, salt) = if IS_CREATE2 {
        popn!([value, code_offset, len, salt], interp, None);
        (value, code_offset, len, Some(salt))
    } else {
        popn!([value, code_offset, len], interp, None);
        (value, code_offset, len, None)
    };
    let len = as_usize_or_fail_ret!(interp, len_word, None);

    let mut init_code = Bytes::new();
    if len != 0 {
        if IS_CREATE2 {
            // EIP-1014 derives the address from the init code hash.
            gas!(interp, interp.gas_schedule.keccak256_cost(len), None);
        }
        let code_offset = as_usize_or_fail_ret!(interp, code_offset, None);
        if !interp.resize_memory(code_offset, len) {
            return None;
        }
        init_code = Bytes::copy_from_slice(interp.memory.slice(code_offset, len));
    }

    gas!(interp, interp.gas_schedule.create_gas(), None);

    // EIP-150: keep a 64th, forward the rest.
    let mut gas_limit = interp.gas.remaining();
    if interp.spec_id.is_enabled_in(SpecId::TANGERINE) {
        gas_limit -= gas_limit / 64;
    }
    gas!(interp, gas_limit, None);

    let scheme = match salt {
        Some(salt) => CreateScheme::Create2 { salt },
        None => CreateScheme::Create,
    };
    Some(CreateInputs {
        caller: interp.contract.target_address,
        scheme,
        value,
        init_code,
        gas_limit,
    })
}

fn dispatch_create<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H, inputs: CreateInputs) {
    let outcome = host.create(inputs);
    insert_create_outcome(interp, outcome);
}

/// Derives the address the creation will deploy to — the prior fork's rule,
/// behind [`Host::create_address`] — and marks it warm. A freshly computed
/// contract address never owes a cold charge.
fn warm_created_address<H: Host + ?Sized>(host: &mut H, inputs: &CreateInputs) {
    let address = host.create_address(inputs.caller, inputs.scheme, &inputs.init_code);
    host.access_mut().mark_address_warm(address);
}

/// Implements the CREATE instruction.
pub fn create<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    let Some(inputs) = prepare_create_inputs::<false>(interp) else {
        return;
    };
    dispatch_create(interp, host, inputs);
}

/// Implements the CREATE2 instruction.
pub fn create2<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    check!(interp, PETERSBURG);
    let Some(inputs) = prepare_create_inputs::<true>(interp) else {
        return;
    };
    dispatch_create(interp, host, inputs);
}

/// CREATE with EIP-2929 warming of the computed address.
pub fn create_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    let Some(inputs) = prepare_create_inputs::<false>(interp) else {
        return;
    };
    warm_created_address(host, &inputs);
    dispatch_create(interp, host, inputs);
}

/// CREATE2 with EIP-2929 warming of the computed address.
pub fn create2_eip2929<H: Host + ?Sized>(interp: &mut Interpreter, host: &mut H) {
    check!(interp, PETERSBURG);
    let Some(inputs) = prepare_create_inputs::<true>(interp) else {
        return;
    };
    warm_created_address(host, &inputs);
    dispatch_create(interp, host, inputs);
}
