//! # Native Field Constants
//!
//! Bit constants and field masks for the native instruction forms. The rule
//! for every name in here is the same one the opcode tables follow: the
//! constant is the raw field value already shifted to its position, and a
//! mask recovers exactly its own field, nothing more.
//!
//! The conditional branch form shows how the masks tile a whole word:
//!
//! ```text
//! 31       26 25    21 20    16 15                2  1  0
//! ┌──────────┬────────┬────────┬───────────────────┬──┬──┐
//! │  opcode  │   BO   │   BI   │        BD         │AA│LK│
//! └──────────┴────────┴────────┴───────────────────┴──┴──┘
//! ```

use serde::{Deserialize, Serialize};

pub const B6: u32 = 1 << 6;
pub const B10: u32 = 1 << 10;
pub const B11: u32 = 1 << 11;
pub const B16: u32 = 1 << 16;
pub const B21: u32 = 1 << 21;

/// BO field of a conditional branch, bits 25-21.
pub const BO_MASK: u32 = 0x1F << 21;
/// BI field of a conditional branch (the CR bit to test), bits 20-16.
pub const BI_MASK: u32 = 0x1F << 16;
/// Branch displacement of a conditional branch, bits 15-2.
pub const BD_MASK: u32 = 0x3FFF << 2;
/// Absolute-address flag, bit 1.
pub const AA_MASK: u32 = 0x01 << 1;
/// Link flag, bit 0.
pub const LK_MASK: u32 = 0x01;
/// Record flag, bit 0.
pub const RC_MASK: u32 = 0x01;
/// TO field of a trap instruction, bits 25-21.
pub const TO_MASK: u32 = 0x1F << 21;

/// 16-bit displacement of the load/store forms, bits 15-0.
pub const OFF16_MASK: u32 = (1 << 16) - 1;
/// 16-bit immediate of the arithmetic and logical forms, bits 15-0.
pub const IMM16_MASK: u32 = (1 << 16) - 1;
/// 26-bit branch offset field, bits 25-0.
pub const IMM26_MASK: u32 = (1 << 26) - 1;

/// Special-purpose register selector, bits 20-11.
pub const SPR_MASK: u32 = 0x3FF << 11;

/// Overflow-enable flag of the EXT2 arithmetic encodings, bit 10.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum OEBit {
    /// Record overflow into XER.
    SetOE = 1 << 10,
    /// Leave XER untouched.
    LeaveOE = 0,
}

impl From<bool> for OEBit {
    fn from(value: bool) -> Self {
        if value { Self::SetOE } else { Self::LeaveOE }
    }
}

/// Record flag, bit 0. Set by the dot forms to update CR0 (CR1 for
/// floating-point).
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum RCBit {
    /// Record the result into the condition register.
    SetRC = 1,
    /// Leave the condition register untouched.
    LeaveRC = 0,
}

impl From<bool> for RCBit {
    fn from(value: bool) -> Self {
        if value { Self::SetRC } else { Self::LeaveRC }
    }
}

/// Link flag of the branch forms, bit 0.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum LKBit {
    /// Save the return address into the link register.
    SetLK = 1,
    /// Plain branch.
    LeaveLK = 0,
}

impl From<bool> for LKBit {
    fn from(value: bool) -> Self {
        if value { Self::SetLK } else { Self::LeaveLK }
    }
}

/// BO field values, bits 25-21. Picks the branch condition out of the CTR
/// count and the tested CR bit.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum BOField {
    /// Decrement CTR; branch if CTR != 0 and the condition is false.
    DCBNZF = 0 << 21,
    /// Decrement CTR; branch if CTR == 0 and the condition is false.
    DCBEZF = 2 << 21,
    /// Branch if the condition is false.
    BF = 4 << 21,
    /// Decrement CTR; branch if CTR != 0 and the condition is true.
    DCBNZT = 8 << 21,
    /// Decrement CTR; branch if CTR == 0 and the condition is true.
    DCBEZT = 10 << 21,
    /// Branch if the condition is true.
    BT = 12 << 21,
    /// Decrement CTR; branch if CTR != 0.
    DCBNZ = 16 << 21,
    /// Decrement CTR; branch if CTR == 0.
    DCBEZ = 18 << 21,
    /// Branch always.
    BA = 20 << 21,
}

/// Bit positions within a 4-bit condition register field.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum CRBit {
    /// Less than.
    LT = 0,
    /// Greater than.
    GT = 1,
    /// Equal.
    EQ = 2,
    /// Summary overflow.
    OF = 3,
}

/// Width of one condition register field.
pub const CR_WIDTH: u32 = 4;

/// Special-purpose register selectors, pre-shifted to bits 20-11.
///
/// The architecture swaps the halves of the 10-bit SPR number inside the
/// field, so the selector for SPR `n` is `((n & 0x1F) << 5 | n >> 5) << 11`.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum SpecialPurposeRegister {
    /// Fixed-point exception register, SPR 1.
    XER = 32 << 11,
    /// Link register, SPR 8.
    LR = 256 << 11,
    /// Count register, SPR 9.
    CTR = 288 << 11,
}
