//! Constants shared across the frostvm crates.

use crate::B256;

/// The Keccak-256 hash of the empty byte string.
///
/// Accounts without code carry this hash; EXTCODEHASH nevertheless pushes a
/// zero word for accounts that are defined-empty.
pub const KECCAK_EMPTY: B256 =
    crate::b256!("0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");

/// Interpreter stack limit in words.
pub const STACK_LIMIT: usize = 1024;

/// Maximum call depth before a sub-call fails with `CallTooDeep`.
pub const CALL_STACK_LIMIT: usize = 1024;
