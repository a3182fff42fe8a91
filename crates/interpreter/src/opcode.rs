//! Opcode constants for the instruction families this crate implements,
//! plus the minimal driver set.

/// `STOP`
pub const STOP: u8 = 0x00;
/// `BALANCE`
pub const BALANCE: u8 = 0x31;
/// `EXTCODESIZE`
pub const EXTCODESIZE: u8 = 0x3b;
/// `EXTCODECOPY`
pub const EXTCODECOPY: u8 = 0x3c;
/// `EXTCODEHASH`
pub const EXTCODEHASH: u8 = 0x3f;
/// `POP`
pub const POP: u8 = 0x50;
/// `SLOAD`
pub const SLOAD: u8 = 0x54;
/// `SSTORE`
pub const SSTORE: u8 = 0x55;
/// `PUSH1`
pub const PUSH1: u8 = 0x60;
/// `PUSH32`
pub const PUSH32: u8 = 0x7f;
/// `CREATE`
pub const CREATE: u8 = 0xf0;
/// `CALL`
pub const CALL: u8 = 0xf1;
/// `CALLCODE`
pub const CALLCODE: u8 = 0xf2;
/// `DELEGATECALL`
pub const DELEGATECALL: u8 = 0xf4;
/// `CREATE2`
pub const CREATE2: u8 = 0xf5;
/// `STATICCALL`
pub const STATICCALL: u8 = 0xfa;
/// `SELFDESTRUCT`
pub const SELFDESTRUCT: u8 = 0xff;

/// Returns the mnemonic of `opcode` for the opcodes this crate implements,
/// or `"UNKNOWN"`.
pub const fn name(op: u8) -> &'static str {
    match op {
        STOP => "STOP",
        BALANCE => "BALANCE",
        EXTCODESIZE => "EXTCODESIZE",
        EXTCODECOPY => "EXTCODECOPY",
        EXTCODEHASH => "EXTCODEHASH",
        POP => "POP",
        SLOAD => "SLOAD",
        SSTORE => "SSTORE",
        PUSH1..=PUSH32 => "PUSH",
        CREATE => "CREATE",
        CALL => "CALL",
        CALLCODE => "CALLCODE",
        DELEGATECALL => "DELEGATECALL",
        CREATE2 => "CREATE2",
        STATICCALL => "STATICCALL",
        SELFDESTRUCT => "SELFDESTRUCT",
        _ => "UNKNOWN",
    }
}
