//! # frostvm-primitives
//!
//! Primitive types shared across the frostvm crates. Mostly thin re-exports
//! of [`alloy_primitives`] plus the hardfork specification ids.
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;
pub mod hardfork;

pub use constants::*;

pub use alloy_primitives::{
    self, address, b256, bytes, hex, keccak256,
    map::{self, HashMap, HashSet},
    Address, Bytes, B256, U256,
};
