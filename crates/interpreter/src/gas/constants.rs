/// Base gas cost for basic operations.
pub const BASE: u64 = 2;
/// Gas cost for very low-cost operations (PUSH, arithmetic).
pub const VERYLOW: u64 = 3;

/// Gas cost for CREATE.
pub const CREATE: u64 = 32000;
/// Additional gas cost when a call transfers value.
pub const CALLVALUE: u64 = 9000;
/// Gas cost for creating a new account.
pub const NEWACCOUNT: u64 = 25000;
/// Gas cost per word for memory expansion.
pub const MEMORY: u64 = 3;
/// Divisor of the quadratic memory expansion term.
pub const MEMORY_QUADRATIC_DIV: u64 = 512;
/// Gas cost per word for copy operations.
pub const COPY: u64 = 3;
/// Gas cost per word hashed by KECCAK256 (CREATE2 init code).
pub const KECCAK256WORD: u64 = 6;

/// EIP-1884: Repricing for trie-size-dependent opcodes.
pub const ISTANBUL_SLOAD_GAS: u64 = 800;
/// Gas cost for SSTORE when setting a storage slot from zero to non-zero.
pub const SSTORE_SET: u64 = 20000;
/// Gas cost for SSTORE when modifying an existing non-zero storage slot.
pub const SSTORE_RESET: u64 = 5000;
/// Gas refund for SSTORE when clearing a storage slot.
pub const REFUND_SSTORE_CLEARS: i64 = 15000;
/// Gas refund for SELFDESTRUCT, removed by EIP-3529.
pub const SELFDESTRUCT_REFUND: u64 = 24000;

// EIP-2929 constants.
/// Gas cost for an address in the transaction access list (EIP-2930).
pub const ACCESS_LIST_ADDRESS: u64 = 2400;
/// Gas cost for a storage key in the transaction access list (EIP-2930).
pub const ACCESS_LIST_STORAGE_KEY: u64 = 1900;
/// Gas cost for SLOAD of a cold storage slot.
pub const COLD_SLOAD_COST: u64 = 2100;
/// Gas cost for the first access to an account in a transaction.
pub const COLD_ACCOUNT_ACCESS_COST: u64 = 2600;
/// Gas cost for reading warm storage or a warm account.
pub const WARM_STORAGE_READ_COST: u64 = 100;
/// Gas cost for SSTORE reset once the cold load is accounted separately.
pub const WARM_SSTORE_RESET: u64 = SSTORE_RESET - COLD_SLOAD_COST;

/// Gas stipend passed to the recipient of a value-transferring call.
pub const CALL_STIPEND: u64 = 2300;
