//! # Legacy Condition Codes
//!
//! The backend was ported from an architecture where almost every
//! instruction is conditionally executed on a 4-bit condition field in the
//! top bits (31-28) of the word. The native architecture has nothing of the
//! sort, conditional branches test a condition register bit through the BO
//! and BI fields instead, but the ported macro assembler still speaks in
//! these codes and the translation to BO/BI happens at emission time.
//!
//! This module keeps the original code points, pre-shifted to bits 31-28 so
//! a value can be OR-ed straight into a legacy-notation word:
//!
//! ```text
//! ┌──────┬────────┬──────────────────────┬──────────────────────┐
//! │ Code │ Suffix │       Meaning        │     Flags tested     │
//! ├──────┼────────┼──────────────────────┼──────────────────────┤
//! │ 0000 │   EQ   │ Equal                │ Z=1                  │
//! │ 0001 │   NE   │ Not equal            │ Z=0                  │
//! │ 0010 │   CS   │ Carry set / ≥ (uns)  │ C=1                  │
//! │ 0011 │   CC   │ Carry clear / < (uns)│ C=0                  │
//! │ 0100 │   MI   │ Minus / negative     │ N=1                  │
//! │ 0101 │   PL   │ Plus / non-negative  │ N=0                  │
//! │ 0110 │   VS   │ Overflow set         │ V=1                  │
//! │ 0111 │   VC   │ Overflow clear       │ V=0                  │
//! │ 1000 │   HI   │ Higher (unsigned)    │ C=1 AND Z=0          │
//! │ 1001 │   LS   │ Lower/same (unsigned)│ C=0 OR Z=1           │
//! │ 1010 │   GE   │ ≥ (signed)           │ N=V                  │
//! │ 1011 │   LT   │ < (signed)           │ N≠V                  │
//! │ 1100 │   GT   │ > (signed)           │ Z=0 AND N=V          │
//! │ 1101 │   LE   │ ≤ (signed)           │ Z=1 OR N≠V           │
//! │ 1110 │   AL   │ Always               │ (unconditional)      │
//! │ 1111 │   --   │ Special / reserved   │ (don't use)          │
//! └──────┴────────┴──────────────────────┴──────────────────────┘
//! ```
//!
//! Two different transformations exist and they are not the same thing:
//!
//! - [`Condition::negated`] complements the test itself (EQ becomes NE).
//!   Use it when the branch sense flips.
//! - [`Condition::reversed`] compensates for swapped comparison operands
//!   (LT becomes GT). The symmetric codes map to themselves.

use serde::{Deserialize, Serialize};

/// Condition codes of the legacy notation, pre-shifted to bits 31-28.
///
/// See the [module-level documentation](self) for the full table and for
/// the difference between negating and reversing a condition.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum Condition {
    /// Equal (Z=1).
    EQ = 0 << 28,

    /// Not equal (Z=0).
    NE = 1 << 28,

    /// Carry set / unsigned higher or same (C=1). Also spelled
    /// [`Condition::HS`].
    CS = 2 << 28,

    /// Carry clear / unsigned lower (C=0). Also spelled [`Condition::LO`].
    CC = 3 << 28,

    /// Minus / negative (N=1).
    MI = 4 << 28,

    /// Plus / positive or zero (N=0).
    PL = 5 << 28,

    /// Overflow set (V=1).
    VS = 6 << 28,

    /// Overflow clear (V=0).
    VC = 7 << 28,

    /// Unsigned higher (C=1 and Z=0).
    HI = 8 << 28,

    /// Unsigned lower or same (C=0 or Z=1).
    LS = 9 << 28,

    /// Signed greater or equal (N=V).
    GE = 10 << 28,

    /// Signed less than (N≠V).
    LT = 11 << 28,

    /// Signed greater than (Z=0 and N=V).
    GT = 12 << 28,

    /// Signed less than or equal (Z=1 or N≠V).
    LE = 13 << 28,

    /// Always (unconditional). The default when no suffix is written.
    AL = 14 << 28,

    /// Reserved code point, claimed by special unconditional encodings in
    /// later revisions of the source architecture. Never emitted here.
    Special = 15 << 28,
}

impl Condition {
    /// Unsigned higher or same, the alternative mnemonic for
    /// [`Condition::CS`].
    pub const HS: Self = Self::CS;

    /// Unsigned lower, the alternative mnemonic for [`Condition::CC`].
    pub const LO: Self = Self::CC;

    /// Number of entries in the condition table.
    pub const NUMBER_OF_CONDITIONS: u32 = 16;

    /// The complementary condition: true exactly when `self` is false.
    ///
    /// AL has no complement and must not be passed in.
    #[must_use]
    pub fn negated(self) -> Self {
        debug_assert_ne!(self, Self::AL);

        // The table pairs complements on the lowest code bit.
        Self::from((self.code() ^ 1) as u8)
    }

    /// The condition that gives the same answer after the comparison
    /// operands are swapped. Symmetric conditions map to themselves.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::CC => Self::HI,
            Self::HI => Self::CC,
            Self::CS => Self::LS,
            Self::LS => Self::CS,
            Self::LT => Self::GT,
            Self::GT => Self::LT,
            Self::GE => Self::LE,
            Self::LE => Self::GE,
            _ => self,
        }
    }

    /// The raw 4-bit code, unshifted.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32 >> 28
    }
}

impl From<u8> for Condition {
    /// Builds a condition from its raw 4-bit code, as extracted from
    /// bits 31-28 of a word.
    fn from(item: u8) -> Self {
        match item {
            0x0 => Self::EQ,
            0x1 => Self::NE,
            0x2 => Self::CS,
            0x3 => Self::CC,
            0x4 => Self::MI,
            0x5 => Self::PL,
            0x6 => Self::VS,
            0x7 => Self::VC,
            0x8 => Self::HI,
            0x9 => Self::LS,
            0xA => Self::GE,
            0xB => Self::LT,
            0xC => Self::GT,
            0xD => Self::LE,
            0xE => Self::AL,
            0xF => Self::Special,
            _ => unreachable!(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EQ => f.write_str("EQ"),
            Self::NE => f.write_str("NE"),
            Self::CS => f.write_str("CS"),
            Self::CC => f.write_str("CC"),
            Self::MI => f.write_str("MI"),
            Self::PL => f.write_str("PL"),
            Self::VS => f.write_str("VS"),
            Self::VC => f.write_str("VC"),
            Self::HI => f.write_str("HI"),
            Self::LS => f.write_str("LS"),
            Self::GE => f.write_str("GE"),
            Self::LT => f.write_str("LT"),
            Self::GT => f.write_str("GT"),
            Self::LE => f.write_str("LE"),
            Self::AL => Ok(()),
            Self::Special => f.write_str("_SPECIAL"),
        }
    }
}

/// Branch hints. The source architecture has none, so a single neutral
/// variant keeps ported signatures compiling.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Hint {
    #[default]
    NoHint,
}

/// With only the neutral hint in the table, negation is the identity.
#[must_use]
pub const fn negate_hint(hint: Hint) -> Hint {
    hint
}
