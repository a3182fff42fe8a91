//! Hardfork specification identifiers.
#![allow(non_camel_case_types)]

pub use SpecId::*;

/// Specification IDs in mainnet activation order.
///
/// A fork's rules are expressed as overrides on top of the previous fork's
/// rules, so "is this rule active" is an ordinal comparison, never an
/// equality check.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecId {
    /// Frontier
    FRONTIER = 0,
    /// Frontier Thawing (no protocol rule changes)
    FRONTIER_THAWING = 1,
    /// Homestead
    HOMESTEAD = 2,
    /// DAO Fork (no protocol rule changes)
    DAO_FORK = 3,
    /// Tangerine Whistle (EIP-150: IO-heavy opcode repricing)
    TANGERINE = 4,
    /// Spurious Dragon (EIP-161: state trie clearing)
    SPURIOUS_DRAGON = 5,
    /// Byzantium (STATICCALL)
    BYZANTIUM = 6,
    /// Constantinople (CREATE2, EXTCODEHASH)
    CONSTANTINOPLE = 7,
    /// Petersburg (Constantinople with EIP-1283 removed)
    PETERSBURG = 8,
    /// Istanbul (EIP-1884 repricing, EIP-2200 net gas metering)
    ISTANBUL = 9,
    /// Muir Glacier (no protocol rule changes)
    MUIR_GLACIER = 10,
    /// Berlin (EIP-2929: warm/cold access costs)
    BERLIN = 11,
    /// London (EIP-3529: refund reduction)
    LONDON = 12,
    /// The most recent fork this crate knows about.
    #[default]
    LATEST = u8::MAX,
}

impl SpecId {
    /// Returns the `SpecId` for the given `u8`, if it names a fork.
    #[inline]
    pub const fn try_from_u8(spec_id: u8) -> Option<Self> {
        Some(match spec_id {
            0 => Self::FRONTIER,
            1 => Self::FRONTIER_THAWING,
            2 => Self::HOMESTEAD,
            3 => Self::DAO_FORK,
            4 => Self::TANGERINE,
            5 => Self::SPURIOUS_DRAGON,
            6 => Self::BYZANTIUM,
            7 => Self::CONSTANTINOPLE,
            8 => Self::PETERSBURG,
            9 => Self::ISTANBUL,
            10 => Self::MUIR_GLACIER,
            11 => Self::BERLIN,
            12 => Self::LONDON,
            u8::MAX => Self::LATEST,
            _ => return None,
        })
    }

    /// Returns `true` if `other`'s rules are active in this spec.
    #[inline]
    pub const fn is_enabled_in(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

/// String identifiers for hardforks.
pub mod name {
    /// String identifier for the Frontier hardfork
    pub const FRONTIER: &str = "Frontier";
    /// String identifier for the Frontier Thawing hardfork
    pub const FRONTIER_THAWING: &str = "Frontier Thawing";
    /// String identifier for the Homestead hardfork
    pub const HOMESTEAD: &str = "Homestead";
    /// String identifier for the DAO Fork hardfork
    pub const DAO_FORK: &str = "DAO Fork";
    /// String identifier for the Tangerine Whistle hardfork
    pub const TANGERINE: &str = "Tangerine";
    /// String identifier for the Spurious Dragon hardfork
    pub const SPURIOUS_DRAGON: &str = "Spurious";
    /// String identifier for the Byzantium hardfork
    pub const BYZANTIUM: &str = "Byzantium";
    /// String identifier for the Constantinople hardfork
    pub const CONSTANTINOPLE: &str = "Constantinople";
    /// String identifier for the Petersburg hardfork
    pub const PETERSBURG: &str = "Petersburg";
    /// String identifier for the Istanbul hardfork
    pub const ISTANBUL: &str = "Istanbul";
    /// String identifier for the Muir Glacier hardfork
    pub const MUIR_GLACIER: &str = "MuirGlacier";
    /// String identifier for the Berlin hardfork
    pub const BERLIN: &str = "Berlin";
    /// String identifier for the London hardfork
    pub const LONDON: &str = "London";
    /// String identifier for the latest hardfork
    pub const LATEST: &str = "Latest";
}

impl From<&str> for SpecId {
    fn from(name_str: &str) -> Self {
        match name_str {
            name::FRONTIER => Self::FRONTIER,
            name::FRONTIER_THAWING => Self::FRONTIER_THAWING,
            name::HOMESTEAD => Self::HOMESTEAD,
            name::DAO_FORK => Self::DAO_FORK,
            name::TANGERINE => Self::TANGERINE,
            name::SPURIOUS_DRAGON => Self::SPURIOUS_DRAGON,
            name::BYZANTIUM => Self::BYZANTIUM,
            name::CONSTANTINOPLE => Self::CONSTANTINOPLE,
            name::PETERSBURG => Self::PETERSBURG,
            name::ISTANBUL => Self::ISTANBUL,
            name::MUIR_GLACIER => Self::MUIR_GLACIER,
            name::BERLIN => Self::BERLIN,
            name::LONDON => Self::LONDON,
            _ => Self::LATEST,
        }
    }
}

impl From<SpecId> for &'static str {
    fn from(spec_id: SpecId) -> Self {
        match spec_id {
            SpecId::FRONTIER => name::FRONTIER,
            SpecId::FRONTIER_THAWING => name::FRONTIER_THAWING,
            SpecId::HOMESTEAD => name::HOMESTEAD,
            SpecId::DAO_FORK => name::DAO_FORK,
            SpecId::TANGERINE => name::TANGERINE,
            SpecId::SPURIOUS_DRAGON => name::SPURIOUS_DRAGON,
            SpecId::BYZANTIUM => name::BYZANTIUM,
            SpecId::CONSTANTINOPLE => name::CONSTANTINOPLE,
            SpecId::PETERSBURG => name::PETERSBURG,
            SpecId::ISTANBUL => name::ISTANBUL,
            SpecId::MUIR_GLACIER => name::MUIR_GLACIER,
            SpecId::BERLIN => name::BERLIN,
            SpecId::LONDON => name::LONDON,
            SpecId::LATEST => name::LATEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_is_ordinal() {
        assert!(SpecId::BERLIN.is_enabled_in(SpecId::ISTANBUL));
        assert!(SpecId::BERLIN.is_enabled_in(SpecId::BERLIN));
        assert!(!SpecId::ISTANBUL.is_enabled_in(SpecId::BERLIN));
        assert!(SpecId::LATEST.is_enabled_in(SpecId::LONDON));
    }

    #[test]
    fn u8_round_trip() {
        for id in [FRONTIER, TANGERINE, ISTANBUL, BERLIN, LONDON, LATEST] {
            assert_eq!(SpecId::try_from_u8(id as u8), Some(id));
        }
        assert_eq!(SpecId::try_from_u8(200), None);
    }

    #[test]
    fn name_round_trip() {
        for id in [FRONTIER, HOMESTEAD, BERLIN, LONDON] {
            let s: &'static str = id.into();
            assert_eq!(SpecId::from(s), id);
        }
    }
}
