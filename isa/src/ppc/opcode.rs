//! # Opcode Tables
//!
//! Every instruction word carries its primary opcode in the top 6 bits:
//!
//! ```text
//! 31       26 25                                                   0
//! ┌──────────┬─────────────────────────────────────────────────────┐
//! │  opcode  │              operands (form-specific)               │
//! └──────────┴─────────────────────────────────────────────────────┘
//! ```
//!
//! Five primary values escape to extended tables, where a second opcode
//! field picks the actual operation. Each extended table owns its own
//! position and width:
//!
//! | Table | Primary | Extended field | Width |
//! |-------|---------|----------------|-------|
//! | EXT1  | 19      | bits 10-1      | 10    |
//! | EXT2  | 31      | bits 10-1 or 9-1 | 10 or 9 |
//! | EXT3  | 59      | bits 5-1       | 5     |
//! | EXT4  | 63      | bits 10-1 or 5-1 | 10 or 5 |
//! | EXT5  | 30      | bits 4-2       | 3     |
//!
//! In EXT2 and EXT4 the arithmetic encodings use the narrow field and leave
//! bit 10 free (the OE flag in EXT2, the top of the FRC operand in EXT4), so
//! recognition always tries the wide field first and only then retries with
//! the narrow one.
//!
//! Every enum value is pre-shifted to its field position, so composing a
//! word is a plain bitwise OR and no shift appears at call sites.
//!
//! Primary values 0 and 1 are never valid operations: 0 stays undefined and
//! 1 is reserved for the legacy notation (see
//! [`fake_opcode`](crate::arm::fake_opcode)).

use serde::{Deserialize, Serialize};

/// Primary opcode field, bits 31-26.
pub const OPCODE_MASK: u32 = 0x3F << 26;

/// Wide extended opcode field, bits 10-1.
pub const EXT_OPCODE_10_MASK: u32 = 0x3FF << 1;

/// Narrow extended opcode field of the EXT2 arithmetic encodings, bits 9-1.
/// Bit 10 is the OE flag there.
pub const EXT_OPCODE_9_MASK: u32 = 0x1FF << 1;

/// Narrow extended opcode field of the EXT3/EXT4 arithmetic encodings,
/// bits 5-1.
pub const EXT_OPCODE_5_MASK: u32 = 0x1F << 1;

/// Extended opcode field of the EXT5 table, bits 4-2.
pub const EXT5_OPCODE_MASK: u32 = 0x7 << 2;

/// Primary opcodes, as defined in section 4.2 table 34 (32-bit PowerPC).
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum Opcode {
    /// Trap Word Immediate.
    TWI = 3 << 26,
    /// Multiply Low Immediate.
    MULLI = 7 << 26,
    /// Subtract from Immediate Carrying.
    SUBFIC = 8 << 26,
    /// Compare Logical Immediate.
    CMPLI = 10 << 26,
    /// Compare Immediate.
    CMPI = 11 << 26,
    /// Add Immediate Carrying.
    ADDIC = 12 << 26,
    /// Add Immediate Carrying and Record.
    ADDICx = 13 << 26,
    /// Add Immediate.
    ADDI = 14 << 26,
    /// Add Immediate Shifted.
    ADDIS = 15 << 26,
    /// Branch Conditional.
    BCX = 16 << 26,
    /// System Call.
    SC = 17 << 26,
    /// Branch.
    BX = 18 << 26,
    /// Extended code set 1 (branch-to-register and CR logic).
    EXT1 = 19 << 26,
    /// Rotate Left Word Immediate then Mask Insert.
    RLWIMIX = 20 << 26,
    /// Rotate Left Word Immediate then AND with Mask.
    RLWINMX = 21 << 26,
    /// Rotate Left then AND with Mask.
    RLWNMX = 23 << 26,
    /// OR Immediate.
    ORI = 24 << 26,
    /// OR Immediate Shifted.
    ORIS = 25 << 26,
    /// XOR Immediate.
    XORI = 26 << 26,
    /// XOR Immediate Shifted.
    XORIS = 27 << 26,
    /// AND Immediate and Record.
    ANDIx = 28 << 26,
    /// AND Immediate Shifted and Record.
    ANDISx = 29 << 26,
    /// Extended code set 5 (64-bit rotates).
    EXT5 = 30 << 26,
    /// Extended code set 2 (fixed-point register forms).
    EXT2 = 31 << 26,
    /// Load Word and Zero.
    LWZ = 32 << 26,
    /// Load Word and Zero with Update.
    LWZU = 33 << 26,
    /// Load Byte and Zero.
    LBZ = 34 << 26,
    /// Load Byte and Zero with Update.
    LBZU = 35 << 26,
    /// Store Word.
    STW = 36 << 26,
    /// Store Word with Update.
    STWU = 37 << 26,
    /// Store Byte.
    STB = 38 << 26,
    /// Store Byte with Update.
    STBU = 39 << 26,
    /// Load Half and Zero.
    LHZ = 40 << 26,
    /// Load Half and Zero with Update.
    LHZU = 41 << 26,
    /// Load Half Algebraic.
    LHA = 42 << 26,
    /// Load Half Algebraic with Update.
    LHAU = 43 << 26,
    /// Store Half.
    STH = 44 << 26,
    /// Store Half with Update.
    STHU = 45 << 26,
    /// Load Multiple Word.
    LMW = 46 << 26,
    /// Store Multiple Word.
    STMW = 47 << 26,
    /// Load Floating-Point Single.
    LFS = 48 << 26,
    /// Load Floating-Point Single with Update.
    LFSU = 49 << 26,
    /// Load Floating-Point Double.
    LFD = 50 << 26,
    /// Load Floating-Point Double with Update.
    LFDU = 51 << 26,
    /// Store Floating-Point Single.
    STFS = 52 << 26,
    /// Store Floating-Point Single with Update.
    STFSU = 53 << 26,
    /// Store Floating-Point Double.
    STFD = 54 << 26,
    /// Store Floating-Point Double with Update.
    STFDU = 55 << 26,
    /// Load Doubleword.
    LD = 58 << 26,
    /// Extended code set 3 (single-precision arithmetic).
    EXT3 = 59 << 26,
    /// Store Doubleword, optionally with Update.
    STD = 62 << 26,
    /// Extended code set 4 (double-precision operations).
    EXT4 = 63 << 26,
}

impl From<Opcode> for u32 {
    fn from(op: Opcode) -> Self {
        op as Self
    }
}

impl TryFrom<u32> for Opcode {
    type Error = String;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match word >> 26 {
            3 => Ok(Self::TWI),
            7 => Ok(Self::MULLI),
            8 => Ok(Self::SUBFIC),
            10 => Ok(Self::CMPLI),
            11 => Ok(Self::CMPI),
            12 => Ok(Self::ADDIC),
            13 => Ok(Self::ADDICx),
            14 => Ok(Self::ADDI),
            15 => Ok(Self::ADDIS),
            16 => Ok(Self::BCX),
            17 => Ok(Self::SC),
            18 => Ok(Self::BX),
            19 => Ok(Self::EXT1),
            20 => Ok(Self::RLWIMIX),
            21 => Ok(Self::RLWINMX),
            23 => Ok(Self::RLWNMX),
            24 => Ok(Self::ORI),
            25 => Ok(Self::ORIS),
            26 => Ok(Self::XORI),
            27 => Ok(Self::XORIS),
            28 => Ok(Self::ANDIx),
            29 => Ok(Self::ANDISx),
            30 => Ok(Self::EXT5),
            31 => Ok(Self::EXT2),
            32 => Ok(Self::LWZ),
            33 => Ok(Self::LWZU),
            34 => Ok(Self::LBZ),
            35 => Ok(Self::LBZU),
            36 => Ok(Self::STW),
            37 => Ok(Self::STWU),
            38 => Ok(Self::STB),
            39 => Ok(Self::STBU),
            40 => Ok(Self::LHZ),
            41 => Ok(Self::LHZU),
            42 => Ok(Self::LHA),
            43 => Ok(Self::LHAU),
            44 => Ok(Self::STH),
            45 => Ok(Self::STHU),
            46 => Ok(Self::LMW),
            47 => Ok(Self::STMW),
            48 => Ok(Self::LFS),
            49 => Ok(Self::LFSU),
            50 => Ok(Self::LFD),
            51 => Ok(Self::LFDU),
            52 => Ok(Self::STFS),
            53 => Ok(Self::STFSU),
            54 => Ok(Self::STFD),
            55 => Ok(Self::STFDU),
            58 => Ok(Self::LD),
            59 => Ok(Self::EXT3),
            62 => Ok(Self::STD),
            63 => Ok(Self::EXT4),
            value => Err(format!("Unexpected value for primary opcode: {value}")),
        }
    }
}

/// Extended opcodes under [`Opcode::EXT1`], field in bits 10-1.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum OpcodeExt1 {
    /// Move Condition Register Field.
    MCRF = 0 << 1,
    /// Branch Conditional to Link Register.
    BCLRX = 16 << 1,
    /// Condition Register NOR.
    CRNOR = 33 << 1,
    /// Return from Interrupt.
    RFI = 50 << 1,
    /// Condition Register AND with Complement.
    CRANDC = 129 << 1,
    /// Instruction Synchronize.
    ISYNC = 150 << 1,
    /// Condition Register XOR.
    CRXOR = 193 << 1,
    /// Condition Register NAND.
    CRNAND = 225 << 1,
    /// Condition Register AND.
    CRAND = 257 << 1,
    /// Condition Register Equivalent.
    CREQV = 289 << 1,
    /// Condition Register OR with Complement.
    CRORC = 417 << 1,
    /// Condition Register OR.
    CROR = 449 << 1,
    /// Branch Conditional to Count Register.
    BCCTRX = 528 << 1,
}

impl TryFrom<u32> for OpcodeExt1 {
    type Error = String;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match (word & EXT_OPCODE_10_MASK) >> 1 {
            0 => Ok(Self::MCRF),
            16 => Ok(Self::BCLRX),
            33 => Ok(Self::CRNOR),
            50 => Ok(Self::RFI),
            129 => Ok(Self::CRANDC),
            150 => Ok(Self::ISYNC),
            193 => Ok(Self::CRXOR),
            225 => Ok(Self::CRNAND),
            257 => Ok(Self::CRAND),
            289 => Ok(Self::CREQV),
            417 => Ok(Self::CRORC),
            449 => Ok(Self::CROR),
            528 => Ok(Self::BCCTRX),
            value => Err(format!("Unexpected value for EXT1 opcode: {value}")),
        }
    }
}

/// Extended opcodes under [`Opcode::EXT2`].
///
/// Values below 512 belong to encodings whose field is 9 bits wide (bit 10
/// is the OE flag); values of 512 and above can only come from the full
/// 10-bit field.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum OpcodeExt2 {
    /// Compare.
    CMP = 0 << 1,
    /// Trap Word.
    TW = 4 << 1,
    /// Subtract from Carrying.
    SUBFCX = 8 << 1,
    /// Add Carrying.
    ADDCX = 10 << 1,
    /// Multiply High Word Unsigned.
    MULHWUX = 11 << 1,
    /// Move from Condition Register.
    MFCR = 19 << 1,
    /// Load Word and Reserve Indexed.
    LWARX = 20 << 1,
    /// Load Doubleword Indexed.
    LDX = 21 << 1,
    /// Load Word and Zero Indexed.
    LWZX = 23 << 1,
    /// Shift Left Word.
    SLWX = 24 << 1,
    /// Count Leading Zeros Word.
    CNTLZWX = 26 << 1,
    /// AND.
    ANDX = 28 << 1,
    /// Compare Logical.
    CMPL = 32 << 1,
    /// Subtract from.
    SUBFX = 40 << 1,
    /// Data Cache Block Store.
    DCBST = 54 << 1,
    /// Load Word and Zero with Update Indexed.
    LWZUX = 55 << 1,
    /// AND with Complement.
    ANDCX = 60 << 1,
    /// Multiply High Word.
    MULHWX = 75 << 1,
    /// Data Cache Block Flush.
    DCBF = 86 << 1,
    /// Load Byte and Zero Indexed.
    LBZX = 87 << 1,
    /// Negate.
    NEGX = 104 << 1,
    /// Load Byte and Zero with Update Indexed.
    LBZUX = 119 << 1,
    /// NOR.
    NORX = 124 << 1,
    /// Subtract from Extended.
    SUBFEX = 136 << 1,
    /// Add Extended.
    ADDEX = 138 << 1,
    /// Store Word Indexed.
    STWX = 151 << 1,
    /// Store Word with Update Indexed.
    STWUX = 183 << 1,
    /// Add to Zero Extended.
    ADDZEX = 202 << 1,
    /// Store Byte Indexed.
    STBX = 215 << 1,
    /// Multiply Low Word.
    MULLW = 235 << 1,
    /// Store Byte with Update Indexed.
    STBUX = 247 << 1,
    /// Add.
    ADDX = 266 << 1,
    /// Load Half and Zero Indexed.
    LHZX = 279 << 1,
    /// Load Half and Zero with Update Indexed.
    LHZUX = 311 << 1,
    /// XOR.
    XORX = 316 << 1,
    /// Move from Special-Purpose Register.
    MFSPR = 339 << 1,
    /// Load Half Algebraic Indexed.
    LHAX = 343 << 1,
    /// Load Half Algebraic with Update Indexed.
    LHAUX = 375 << 1,
    /// Store Half Indexed.
    STHX = 407 << 1,
    /// Store Half with Update Indexed.
    STHUX = 439 << 1,
    /// OR.
    ORX = 444 << 1,
    /// Move to Special-Purpose Register.
    MTSPR = 467 << 1,
    /// Divide Word.
    DIVW = 491 << 1,
    /// Load Floating-Point Single Indexed.
    LFSX = 535 << 1,
    /// Shift Right Word.
    SRWX = 536 << 1,
    /// Load Floating-Point Single with Update Indexed.
    LFSUX = 567 << 1,
    /// Synchronize.
    SYNC = 598 << 1,
    /// Load Floating-Point Double Indexed.
    LFDX = 599 << 1,
    /// Load Floating-Point Double with Update Indexed.
    LFDUX = 631 << 1,
    /// Store Floating-Point Single Indexed.
    STFSX = 663 << 1,
    /// Store Floating-Point Single with Update Indexed.
    STFSUX = 695 << 1,
    /// Store Floating-Point Double Indexed.
    STFDX = 727 << 1,
    /// Store Floating-Point Double with Update Indexed.
    STFDUX = 759 << 1,
    /// Shift Right Algebraic Word.
    SRAW = 792 << 1,
    /// Shift Right Algebraic Word Immediate.
    SRAWIX = 824 << 1,
    /// Extend Sign Halfword.
    EXTSH = 922 << 1,
    /// Extend Sign Byte.
    EXTSB = 954 << 1,
    /// Instruction Cache Block Invalidate.
    ICBI = 982 << 1,
}

impl TryFrom<u32> for OpcodeExt2 {
    type Error = String;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match (word & EXT_OPCODE_10_MASK) >> 1 {
            0 => Ok(Self::CMP),
            4 => Ok(Self::TW),
            8 => Ok(Self::SUBFCX),
            10 => Ok(Self::ADDCX),
            11 => Ok(Self::MULHWUX),
            19 => Ok(Self::MFCR),
            20 => Ok(Self::LWARX),
            21 => Ok(Self::LDX),
            23 => Ok(Self::LWZX),
            24 => Ok(Self::SLWX),
            26 => Ok(Self::CNTLZWX),
            28 => Ok(Self::ANDX),
            32 => Ok(Self::CMPL),
            40 => Ok(Self::SUBFX),
            54 => Ok(Self::DCBST),
            55 => Ok(Self::LWZUX),
            60 => Ok(Self::ANDCX),
            75 => Ok(Self::MULHWX),
            86 => Ok(Self::DCBF),
            87 => Ok(Self::LBZX),
            104 => Ok(Self::NEGX),
            119 => Ok(Self::LBZUX),
            124 => Ok(Self::NORX),
            136 => Ok(Self::SUBFEX),
            138 => Ok(Self::ADDEX),
            151 => Ok(Self::STWX),
            183 => Ok(Self::STWUX),
            202 => Ok(Self::ADDZEX),
            215 => Ok(Self::STBX),
            235 => Ok(Self::MULLW),
            247 => Ok(Self::STBUX),
            266 => Ok(Self::ADDX),
            279 => Ok(Self::LHZX),
            311 => Ok(Self::LHZUX),
            316 => Ok(Self::XORX),
            339 => Ok(Self::MFSPR),
            343 => Ok(Self::LHAX),
            375 => Ok(Self::LHAUX),
            407 => Ok(Self::STHX),
            439 => Ok(Self::STHUX),
            444 => Ok(Self::ORX),
            467 => Ok(Self::MTSPR),
            491 => Ok(Self::DIVW),
            535 => Ok(Self::LFSX),
            536 => Ok(Self::SRWX),
            567 => Ok(Self::LFSUX),
            598 => Ok(Self::SYNC),
            599 => Ok(Self::LFDX),
            631 => Ok(Self::LFDUX),
            663 => Ok(Self::STFSX),
            695 => Ok(Self::STFSUX),
            727 => Ok(Self::STFDX),
            759 => Ok(Self::STFDUX),
            792 => Ok(Self::SRAW),
            824 => Ok(Self::SRAWIX),
            922 => Ok(Self::EXTSH),
            954 => Ok(Self::EXTSB),
            982 => Ok(Self::ICBI),
            // The arithmetic encodings keep bit 10 free for the OE flag, so
            // an unmatched wide field is retried with the flag stripped.
            _ => match (word & EXT_OPCODE_9_MASK) >> 1 {
                8 => Ok(Self::SUBFCX),
                10 => Ok(Self::ADDCX),
                11 => Ok(Self::MULHWUX),
                40 => Ok(Self::SUBFX),
                75 => Ok(Self::MULHWX),
                104 => Ok(Self::NEGX),
                136 => Ok(Self::SUBFEX),
                138 => Ok(Self::ADDEX),
                202 => Ok(Self::ADDZEX),
                235 => Ok(Self::MULLW),
                266 => Ok(Self::ADDX),
                491 => Ok(Self::DIVW),
                value => Err(format!("Unexpected value for EXT2 opcode: {value}")),
            },
        }
    }
}

/// Extended opcodes under [`Opcode::EXT3`], field in bits 5-1
/// (single-precision arithmetic).
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum OpcodeExt3 {
    /// Floating Divide Single.
    FDIVS = 18 << 1,
    /// Floating Subtract Single.
    FSUBS = 20 << 1,
    /// Floating Add Single.
    FADDS = 21 << 1,
    /// Floating Square Root Single.
    FSQRTS = 22 << 1,
    /// Floating Multiply Single.
    FMULS = 25 << 1,
}

impl TryFrom<u32> for OpcodeExt3 {
    type Error = String;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match (word & EXT_OPCODE_5_MASK) >> 1 {
            18 => Ok(Self::FDIVS),
            20 => Ok(Self::FSUBS),
            21 => Ok(Self::FADDS),
            22 => Ok(Self::FSQRTS),
            25 => Ok(Self::FMULS),
            value => Err(format!("Unexpected value for EXT3 opcode: {value}")),
        }
    }
}

/// Extended opcodes under [`Opcode::EXT4`].
///
/// The arithmetic encodings use bits 5-1 only (bits 10-6 hold the FRC
/// operand); everything else uses the full bits 10-1.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum OpcodeExt4 {
    // XO in bits 5-1.
    /// Floating Divide.
    FDIV = 18 << 1,
    /// Floating Subtract.
    FSUB = 20 << 1,
    /// Floating Add.
    FADD = 21 << 1,
    /// Floating Square Root.
    FSQRT = 22 << 1,
    /// Floating Select.
    FSEL = 23 << 1,
    /// Floating Multiply.
    FMUL = 25 << 1,

    // XO in bits 10-1.
    /// Floating Compare Unordered.
    FCMPU = 0 << 1,
    /// Floating Round to Single-Precision.
    FRSP = 12 << 1,
    /// Floating Convert to Integer Word with Round toward Zero.
    FCTIWZ = 15 << 1,
    /// Floating Negate.
    FNEG = 40 << 1,
    /// Move to Condition Register from FPSCR.
    MCRFS = 64 << 1,
    /// Floating Move Register.
    FMR = 72 << 1,
    /// Move to FPSCR Field Immediate.
    MTFSFI = 134 << 1,
    /// Floating Absolute Value.
    FABS = 264 << 1,
    /// Floating Round to Integer Minus.
    FRIM = 488 << 1,
    /// Floating Convert to Integer Doubleword.
    FCTID = 814 << 1,
    /// Floating Convert to Integer Doubleword with Round toward Zero.
    FCTIDZ = 815 << 1,
    /// Floating Convert from Integer Doubleword.
    FCFID = 846 << 1,
}

impl TryFrom<u32> for OpcodeExt4 {
    type Error = String;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match (word & EXT_OPCODE_10_MASK) >> 1 {
            0 => Ok(Self::FCMPU),
            12 => Ok(Self::FRSP),
            15 => Ok(Self::FCTIWZ),
            40 => Ok(Self::FNEG),
            64 => Ok(Self::MCRFS),
            72 => Ok(Self::FMR),
            134 => Ok(Self::MTFSFI),
            264 => Ok(Self::FABS),
            488 => Ok(Self::FRIM),
            814 => Ok(Self::FCTID),
            815 => Ok(Self::FCTIDZ),
            846 => Ok(Self::FCFID),
            // The arithmetic encodings carry the FRC operand in bits 10-6,
            // so an unmatched wide field is retried as a 5-bit one.
            _ => match (word & EXT_OPCODE_5_MASK) >> 1 {
                18 => Ok(Self::FDIV),
                20 => Ok(Self::FSUB),
                21 => Ok(Self::FADD),
                22 => Ok(Self::FSQRT),
                23 => Ok(Self::FSEL),
                25 => Ok(Self::FMUL),
                value => Err(format!("Unexpected value for EXT4 opcode: {value}")),
            },
        }
    }
}

/// Extended opcodes under [`Opcode::EXT5`], field in bits 4-2 (64-bit only).
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum OpcodeExt5 {
    /// Rotate Left Doubleword Immediate then Clear Left.
    RLDICL = 0 << 2,
}

impl TryFrom<u32> for OpcodeExt5 {
    type Error = String;

    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match (word & EXT5_OPCODE_MASK) >> 2 {
            0 => Ok(Self::RLDICL),
            value => Err(format!("Unexpected value for EXT5 opcode: {value}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_OPCODES: [Opcode; 52] = [
        Opcode::TWI,
        Opcode::MULLI,
        Opcode::SUBFIC,
        Opcode::CMPLI,
        Opcode::CMPI,
        Opcode::ADDIC,
        Opcode::ADDICx,
        Opcode::ADDI,
        Opcode::ADDIS,
        Opcode::BCX,
        Opcode::SC,
        Opcode::BX,
        Opcode::EXT1,
        Opcode::RLWIMIX,
        Opcode::RLWINMX,
        Opcode::RLWNMX,
        Opcode::ORI,
        Opcode::ORIS,
        Opcode::XORI,
        Opcode::XORIS,
        Opcode::ANDIx,
        Opcode::ANDISx,
        Opcode::EXT5,
        Opcode::EXT2,
        Opcode::LWZ,
        Opcode::LWZU,
        Opcode::LBZ,
        Opcode::LBZU,
        Opcode::STW,
        Opcode::STWU,
        Opcode::STB,
        Opcode::STBU,
        Opcode::LHZ,
        Opcode::LHZU,
        Opcode::LHA,
        Opcode::LHAU,
        Opcode::STH,
        Opcode::STHU,
        Opcode::LMW,
        Opcode::STMW,
        Opcode::LFS,
        Opcode::LFSU,
        Opcode::LFD,
        Opcode::LFDU,
        Opcode::STFS,
        Opcode::STFSU,
        Opcode::STFD,
        Opcode::STFDU,
        Opcode::LD,
        Opcode::EXT3,
        Opcode::STD,
        Opcode::EXT4,
    ];

    #[test]
    fn primary_values_fit_their_field() {
        for op in ALL_OPCODES {
            let value = op as u32;
            assert_eq!(value & OPCODE_MASK, value);
            assert_eq!(Opcode::try_from(value), Ok(op));
        }
    }

    #[test]
    fn primary_recognition_reads_only_the_top_bits() {
        for op in ALL_OPCODES {
            // A fully-populated operand area must not disturb recognition.
            let word = op as u32 | !OPCODE_MASK;
            assert_eq!(Opcode::try_from(word), Ok(op));
        }
    }

    #[test]
    fn reserved_primary_values_stay_undefined() {
        assert!(Opcode::try_from(0).is_err());
        assert!(Opcode::try_from(1 << 26).is_err());
        assert!(Opcode::try_from(2 << 26).is_err());
    }

    #[test]
    fn addi_word_carries_its_primary_opcode() {
        // addi r3, r4, 5
        let word = Opcode::ADDI as u32 | 3 << 21 | 4 << 16 | 5;

        assert_eq!(word, 0x38640005);
        assert_eq!(Opcode::try_from(word), Ok(Opcode::ADDI));
    }

    #[test]
    fn blr_decodes_through_ext1() {
        // blr is bclr 20, 0: primary 19, extended opcode 16, LK set.
        let word: u32 = 0x4E800020;

        assert_eq!(Opcode::try_from(word), Ok(Opcode::EXT1));
        assert_eq!(OpcodeExt1::try_from(word), Ok(OpcodeExt1::BCLRX));
    }

    #[test]
    fn ext2_wide_field_wins_over_narrow() {
        // srw r3, r4, r5: extended opcode 536. Its low 9 bits alias slw
        // (24), so the wide match has to run first.
        let word = Opcode::EXT2 as u32 | 4 << 21 | 3 << 16 | 5 << 11 | 536 << 1;

        assert_eq!(OpcodeExt2::try_from(word), Ok(OpcodeExt2::SRWX));
    }

    #[test]
    fn ext2_strips_the_oe_flag_on_retry() {
        // addo r3, r4, r5: add (266) with bit 10 set.
        let base = Opcode::EXT2 as u32 | 3 << 21 | 4 << 16 | 5 << 11 | 266 << 1;
        let with_oe = base | 1 << 10;

        assert_eq!(with_oe, 0x7C642E14);
        assert_eq!(OpcodeExt2::try_from(base), Ok(OpcodeExt2::ADDX));
        assert_eq!(OpcodeExt2::try_from(with_oe), Ok(OpcodeExt2::ADDX));
    }

    #[test]
    fn ext4_arithmetic_ignores_the_frc_operand() {
        // fmul f1, f2, f3: extended opcode 25 in bits 5-1, FRC (3) in
        // bits 10-6.
        let word = Opcode::EXT4 as u32 | 1 << 21 | 2 << 16 | 3 << 6 | 25 << 1;

        assert_eq!(OpcodeExt4::try_from(word), Ok(OpcodeExt4::FMUL));

        // fcmpu cr0, f1, f2 uses the full wide field.
        let word = Opcode::EXT4 as u32 | 1 << 16 | 2 << 11;
        assert_eq!(OpcodeExt4::try_from(word), Ok(OpcodeExt4::FCMPU));
    }

    #[test]
    fn ext3_single_precision_forms() {
        // fadds f1, f2, f3
        let word = Opcode::EXT3 as u32 | 1 << 21 | 2 << 16 | 3 << 11 | 21 << 1;

        assert_eq!(OpcodeExt3::try_from(word), Ok(OpcodeExt3::FADDS));
        assert!(OpcodeExt3::try_from(Opcode::EXT3 as u32).is_err());
    }

    #[test]
    fn ext5_rotate_forms() {
        // rldicl r3, r4, 2, 0
        let word = Opcode::EXT5 as u32 | 4 << 21 | 3 << 16 | 2 << 11;

        assert_eq!(OpcodeExt5::try_from(word), Ok(OpcodeExt5::RLDICL));
        assert!(OpcodeExt5::try_from(Opcode::EXT5 as u32 | 1 << 2).is_err());
    }

    #[test]
    fn sub_tables_do_not_recognize_each_other() {
        // blr carries EXT1 opcode 16, which no EXT2 encoding uses.
        let blr: u32 = 0x4E800020;
        assert!(OpcodeExt2::try_from(blr).is_err());

        // srawi carries EXT2 opcode 824, which no EXT1 encoding uses.
        let srawi = Opcode::EXT2 as u32 | 4 << 21 | 3 << 16 | 2 << 11 | 824 << 1;
        assert!(OpcodeExt1::try_from(srawi).is_err());
    }

    #[test]
    fn extended_masks_cover_their_fields() {
        assert_eq!(EXT_OPCODE_10_MASK, 0b0000_0000_0000_0000_0000_0111_1111_1110);
        assert_eq!(EXT_OPCODE_9_MASK, 0b0000_0000_0000_0000_0000_0011_1111_1110);
        assert_eq!(EXT_OPCODE_5_MASK, 0b0000_0000_0000_0000_0000_0000_0011_1110);
        assert_eq!(EXT5_OPCODE_MASK, 0b0000_0000_0000_0000_0000_0000_0001_1100);
        assert_eq!(EXT_OPCODE_9_MASK | 1 << 10, EXT_OPCODE_10_MASK);
    }
}
