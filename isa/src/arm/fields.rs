//! # Legacy Field Constants
//!
//! Field letters, masks and addressing-mode encodings of the source
//! notation, kept so ported emitter code keeps reading like its original.
//!
//! The single-letter constants reuse bit positions on purpose, exactly as
//! the source encodings do: the contexts never overlap (a load flag and a
//! condition-code flag cannot appear in the same instruction class), so the
//! original tables gave two names to one bit. The reuse is confined to this
//! module; nothing native imports these letters.

use serde::{Deserialize, Serialize};

/// Halfword (or byte) transfer.
pub const H: u32 = 1 << 5;
/// Signed (or unsigned) transfer.
pub const S6: u32 = 1 << 6;
/// Load (or store).
pub const L: u32 = 1 << 20;
/// Set condition codes (or leave unchanged). Same bit as [`L`].
pub const S: u32 = 1 << 20;
/// Writeback base register (or leave unchanged).
pub const W: u32 = 1 << 21;
/// Accumulate in multiply (or not). Same bit as [`W`].
pub const A: u32 = 1 << 21;
/// Unsigned byte (or word) transfer.
pub const B: u32 = 1 << 22;
/// Long (or short) coprocessor transfer. Same bit as [`B`].
pub const N: u32 = 1 << 22;
/// Positive (or negative) offset/index.
pub const U: u32 = 1 << 23;
/// Offset/pre-indexed (or post-indexed) addressing.
pub const P: u32 = 1 << 24;
/// Immediate shifter operand (or not).
pub const I: u32 = 1 << 25;

pub const B4: u32 = 1 << 4;
pub const B5: u32 = 1 << 5;
pub const B7: u32 = 1 << 7;
pub const B8: u32 = 1 << 8;
pub const B9: u32 = 1 << 9;
pub const B12: u32 = 1 << 12;
pub const B18: u32 = 1 << 18;
pub const B19: u32 = 1 << 19;
pub const B20: u32 = 1 << 20;
pub const B22: u32 = 1 << 22;
pub const B23: u32 = 1 << 23;
pub const B24: u32 = 1 << 24;
pub const B25: u32 = 1 << 25;
pub const B26: u32 = 1 << 26;
pub const B27: u32 = 1 << 27;
pub const B28: u32 = 1 << 28;

/// Condition field, bits 31-28.
pub const COND_MASK: u32 = 0xF << 28;
/// Class and opcode bits of a data-processing instruction, with the I and S
/// flags left out.
pub const ALU_MASK: u32 = 0x6F << 21;
/// Destination register of the single data transfer forms, bits 15-12.
pub const RD_MASK: u32 = 15 << 12;
/// Coprocessor number, bits 11-8.
pub const COPROCESSOR_MASK: u32 = 15 << 8;
/// Opcode field of a data-processing instruction, bits 24-21.
pub const OPCODE_MASK: u32 = 15 << 21;
/// 12-bit offset of the single data transfer forms, bits 11-0.
pub const OFF12_MASK: u32 = (1 << 12) - 1;
/// 24-bit branch offset, bits 23-0.
pub const IMM24_MASK: u32 = (1 << 24) - 1;

/// Condition-code update flag of the data-processing forms, bit 20.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum SBit {
    /// Update the condition flags from the result.
    SetCC = 1 << 20,
    /// Leave the condition flags untouched.
    LeaveCC = 0,
}

/// Status register selector, bit 22.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum SRegister {
    /// The current program status register.
    CPSR = 0,
    /// The saved program status register of the active mode.
    SPSR = 1 << 22,
}

/// OR-combinable status-register field selection: the register selector
/// plus one of the field bits 19-16.
pub type SRegisterFieldMask = u32;

pub const CPSR_C: SRegisterFieldMask = SRegister::CPSR as u32 | 1 << 16;
pub const CPSR_X: SRegisterFieldMask = SRegister::CPSR as u32 | 1 << 17;
pub const CPSR_S: SRegisterFieldMask = SRegister::CPSR as u32 | 1 << 18;
pub const CPSR_F: SRegisterFieldMask = SRegister::CPSR as u32 | 1 << 19;
pub const SPSR_C: SRegisterFieldMask = SRegister::SPSR as u32 | 1 << 16;
pub const SPSR_X: SRegisterFieldMask = SRegister::SPSR as u32 | 1 << 17;
pub const SPSR_S: SRegisterFieldMask = SRegister::SPSR as u32 | 1 << 18;
pub const SPSR_F: SRegisterFieldMask = SRegister::SPSR as u32 | 1 << 19;

/// Shift applied to the register shifter operand, bits 6-5.
///
/// `RRX` exists only as an assembler argument: it has no code point of its
/// own and is emitted as `ROR` with a zero immediate.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(i32)]
pub enum ShiftOp {
    /// Logical shift left.
    LSL = 0 << 5,
    /// Logical shift right.
    LSR = 1 << 5,
    /// Arithmetic shift right.
    ASR = 2 << 5,
    /// Rotate right.
    ROR = 3 << 5,
    /// Rotate right with extend.
    RRX = -1,
}

impl ShiftOp {
    /// Number of encodable shifts. `RRX` does not count, having no code
    /// point.
    pub const NUMBER_OF_SHIFTS: u32 = 4;
}

/// Single data transfer addressing modes, the P, U and W flags pre-combined
/// in bits 24-21.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum AddrMode {
    /// Positive offset, no writeback to the base.
    Offset = P | U,
    /// Positive pre-indexed, with writeback.
    PreIndex = P | U | W,
    /// Positive post-indexed, with writeback.
    PostIndex = U,
    /// Negative offset, no writeback to the base.
    NegOffset = P,
    /// Negative pre-indexed, with writeback.
    NegPreIndex = P | W,
    /// Negative post-indexed, with writeback.
    NegPostIndex = 0,
}

/// Block transfer addressing modes, the P, U and W flags pre-combined in
/// bits 24-21.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum BlockAddrMode {
    /// Decrement after.
    Da = 0,
    /// Increment after.
    Ia = U,
    /// Decrement before.
    Db = P,
    /// Increment before.
    Ib = P | U,
    /// Decrement after, writeback.
    DaW = W,
    /// Increment after, writeback.
    IaW = U | W,
    /// Decrement before, writeback.
    DbW = P | W,
    /// Increment before, writeback.
    IbW = P | U | W,
}

impl BlockAddrMode {
    /// Alias for comparisons where writeback does not matter.
    pub const DA_X: Self = Self::Da;
    /// Alias for comparisons where writeback does not matter.
    pub const IA_X: Self = Self::Ia;
    /// Alias for comparisons where writeback does not matter.
    pub const DB_X: Self = Self::Db;
    /// Alias for comparisons where writeback does not matter.
    pub const IB_X: Self = Self::Ib;
}

/// Field covering the P, U and W flags of a block transfer.
pub const BLOCK_ADDR_MODE_MASK: u32 = P | U | W;

/// Coprocessor transfer length, bit 22.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum LFlag {
    /// Long coprocessor load/store.
    Long = 1 << 22,
    /// Short coprocessor load/store.
    Short = 0,
}
