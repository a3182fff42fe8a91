//! End-to-end warm/cold metering across a whole transaction, driven through
//! the dispatch loop and real nested call frames.

use frostvm_interpreter::{
    instruction_table, Contract, DummyAccount, DummyHost, InstructionResult, Interpreter,
};
use primitives::{address, hardfork::SpecId, Address, Bytes, U256};

const X: Address = address!("0x00000000000000000000000000000000000000aa");
const A: Address = address!("0x00000000000000000000000000000000000000bb");

fn word(address: Address) -> U256 {
    U256::from_be_bytes(address.into_word().0)
}

/// PUSH20 `address`.
fn push20(address: Address) -> Vec<u8> {
    let mut code = vec![0x73];
    code.extend_from_slice(address.as_slice());
    code
}

#[test]
fn account_warmth_spans_call_frames() {
    // The transaction touches A three times from the outer frame — BALANCE
    // (cold), EXTCODESIZE (warm), CALL (warm) — and a fourth time from
    // inside the nested frame (warm). One cold charge total.
    let mut outer_code = Vec::new();
    outer_code.extend_from_slice(&push20(A));
    outer_code.push(0x31); // BALANCE
    outer_code.push(0x50); // POP
    outer_code.extend_from_slice(&push20(A));
    outer_code.push(0x3b); // EXTCODESIZE
    outer_code.push(0x50); // POP
    for _ in 0..5 {
        outer_code.extend_from_slice(&[0x60, 0x00]); // out/in ranges, value
    }
    outer_code.extend_from_slice(&push20(A));
    outer_code.extend_from_slice(&[0x61, 0xff, 0xff]); // PUSH2 gas
    outer_code.push(0xf1); // CALL
    outer_code.push(0x00); // STOP

    // A's own code reads A's balance again, one frame down.
    let mut inner_code = push20(A);
    inner_code.push(0x31);
    inner_code.push(0x00);

    let mut host = DummyHost::new(SpecId::BERLIN);
    host.insert_account(A, DummyAccount::with_code(inner_code.into()));

    let table = instruction_table::<DummyHost>(SpecId::BERLIN);
    let contract = Contract::new(X, Address::ZERO, outer_code.into(), Bytes::new(), U256::ZERO);
    let mut frame = Interpreter::new(contract, 1_000_000, SpecId::BERLIN, false);

    assert_eq!(frame.run(&table, &mut host), InstructionResult::Stop);
    assert_eq!(frame.stack.pop(), Some(U256::from(1)));

    // Account-load charges for A: 2600 + 100 + 100, plus 100 in the nested
    // frame. Driver opcodes: 4x PUSH20 + 6x PUSH1/PUSH2 + 2x POP.
    let account_loads = 2600 + 100 + 100 + 100;
    let driver = 4 * 3 + 6 * 3 + 2 * 2;
    assert_eq!(frame.gas.spent(), account_loads + driver);

    assert!(host.access.is_address_warm(A));
    assert_eq!(host.access.warm_address_count(), 1);
}

#[test]
fn create_leaves_the_new_address_warm_end_to_end() {
    // PUSH1 0 (len), PUSH1 0 (offset), PUSH1 0 (value), CREATE, STOP
    let code = Bytes::from_static(&[0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0xf0, 0x00]);

    let mut host = DummyHost::new(SpecId::BERLIN);
    let table = instruction_table::<DummyHost>(SpecId::BERLIN);
    let contract = Contract::new(X, Address::ZERO, code, Bytes::new(), U256::ZERO);
    let mut frame = Interpreter::new(contract, 1_000_000, SpecId::BERLIN, false);

    assert_eq!(frame.run(&table, &mut host), InstructionResult::Stop);

    let created = X.create(0);
    assert_eq!(frame.stack.pop(), Some(word(created)));
    assert!(host.access.is_address_warm(created));
    // three pushes plus the base creation cost; no cold charge for the
    // freshly computed address
    assert_eq!(frame.gas.spent(), 3 * 3 + 32000);

    // touching it afterwards is a warm access
    assert!(!host.access.mark_address_warm(created));
}

#[test]
fn warmth_is_not_rolled_back_by_a_failed_sub_call() {
    // The callee burns all its gas on a cold BALANCE of an address the
    // caller never touched; the caller's later access is warm anyway.
    let probe = address!("0x00000000000000000000000000000000000000cc");

    let mut inner_code = push20(probe);
    inner_code.push(0x31); // BALANCE: 2600 > the forwarded budget
    inner_code.push(0x00);

    let mut outer_code = Vec::new();
    for _ in 0..5 {
        outer_code.extend_from_slice(&[0x60, 0x00]);
    }
    outer_code.extend_from_slice(&push20(A));
    outer_code.extend_from_slice(&[0x61, 0x01, 0x00]); // PUSH2 256: starves the callee
    outer_code.push(0xf1); // CALL
    outer_code.push(0x00); // STOP

    let mut host = DummyHost::new(SpecId::BERLIN);
    host.insert_account(A, DummyAccount::with_code(inner_code.into()));

    let table = instruction_table::<DummyHost>(SpecId::BERLIN);
    let contract = Contract::new(X, Address::ZERO, outer_code.into(), Bytes::new(), U256::ZERO);
    let mut frame = Interpreter::new(contract, 1_000_000, SpecId::BERLIN, false);

    assert_eq!(frame.run(&table, &mut host), InstructionResult::Stop);
    // the sub-call ran out of gas...
    assert_eq!(frame.stack.pop(), Some(U256::ZERO));
    // ...but the warmth it recorded stays for the rest of the transaction
    assert!(host.access.is_address_warm(probe));
}
