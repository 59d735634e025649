//! # The Reserved Slot
//!
//! The port proceeded incrementally: whole emitter paths still speak the
//! source notation while their native encodings get written. To keep such
//! code emitting *something* recognizable, primary opcode 1, which the
//! native architecture leaves undefined, carries two parallel spaces of
//! placeholder words:
//!
//! ```text
//! 31       26  25  24                 9 8                 0
//! ┌───────────┬───┬────────────────────┬───────────────────┐
//! │ 0b000001  │ M │                    │     marker id     │   M = 1
//! ├───────────┼───┼──────────────────┬─┴─────────┬─────────┤
//! │ 0b000001  │ M │                  │        tag          │   M = 0
//! └───────────┴───┴──────────────────┴─────────────────────┘
//! ```
//!
//! Bit 25 discriminates: set means the word is a *stub marker*, an id a
//! code stub plants so a trace or crash dump can say which stub produced
//! the code; clear means the word is a *fake opcode*, a stand-in for one
//! source-notation instruction named by the 7-bit tag.
//!
//! The two payload widths differ (9 bits of marker id against 7 bits of
//! tag), so the spaces overlap numerically and only the discriminator
//! separates them. [`Instruction::kind`](crate::ppc::instruction::Instruction::kind)
//! checks it before interpreting the payload.

use serde::{Deserialize, Serialize};

/// The reserved primary opcode slot, value 1 in bits 31-26.
pub const FAKE_OPCODE: u32 = 1 << 26;

/// Position of the marker/faker discriminator.
pub const MARKER_SUBOPCODE_BIT: u8 = 25;

/// Discriminator value of a stub marker word.
pub const MARKER_SUBOPCODE: u32 = 1 << MARKER_SUBOPCODE_BIT;

/// Discriminator value of a fake opcode word: the bit stays clear.
pub const FAKER_SUBOPCODE: u32 = 0;

/// Width of a fake opcode tag. Tags live in `[0, 128)`.
pub const FAKE_OPCODE_HIGH_BIT: u8 = 7;

/// Width of a stub marker id. Ids live in `[0, 512)`.
pub const STUB_MARKER_HIGH_BIT: u8 = 9;

/// One past the highest assigned tag. Everything below is either assigned
/// or a deliberate hole left by a retired tag.
pub const LAST_FAKER: u32 = 111;

/// Next free stub marker id.
pub const NEXT_AVAILABLE_STUB_MARKER: u32 = 369;

/// Tags of the fake opcode space, one per source-notation instruction that
/// ported emitter code may still ask for.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum FakeOpcode {
    // Status register transfer.
    MRS = 0,
    MSR = 1,

    // Loads and stores. Tag 13 is a hole: the stop placeholder that used
    // to sit there was retired in favour of the stop service code (see
    // [`svc`](crate::arm::svc)).
    LDR = 2,
    STR = 3,
    LDRB = 4,
    STRB = 5,
    LDRH = 6,
    STRH = 7,
    LDRSH = 8,
    LDRD = 9,
    STRD = 10,
    LDM = 11,
    STM = 12,

    BKPT = 14,
    SVC = 15,

    // Floating point.
    VLDR = 16,
    VSTR = 17,
    VMOV = 18,
    VNEG = 19,
    VABS = 20,
    VADD = 21,
    VSUB = 22,
    VMUL = 23,
    VDIV = 24,
    VCMP = 25,
    VMSR = 26,
    VMRS = 27,
    VSQRT = 28,

    // Data processing.
    AND = 29,
    EOR = 30,
    RSB = 31,
    ADC = 32,
    SBC = 33,
    RSC = 34,
    TST = 35,
    TEQ = 36,
    CMP = 37,
    CMN = 38,
    ORR = 39,
    BIC = 40,
    MVN = 41,
    LDRSB = 42,
    ADD = 43,
    Branch = 44,

    // Markers for helper sequences whose bodies were removed instead of
    // ported; each tag stands for one removed sequence.
    MASM1 = 60,
    MASM3 = 61,
    MASM4 = 62,
    MASM5 = 63,
    MASM6 = 64,
    MASM7 = 65,
    MASM8 = 66,
    MASM12 = 67,
    MASM13 = 68,
    MASM16 = 69,
    MASM17 = 70,
    MASM18 = 71,
    MASM19 = 72,
    MASM20 = 73,
    MASM21 = 74,
    MASM22 = 75,
    MASM23 = 76,
    MASM26 = 79,
    MASM27 = 80,
    MASM28 = 81,
    MASM29 = 82,

    // Same, for sequences the optimizing backend used to emit.
    LITHIUM90 = 90,
    LITHIUM91 = 91,
    LITHIUM92 = 92,
    LITHIUM93 = 93,
    LITHIUM94 = 94,
    LITHIUM95 = 95,
    LITHIUM96 = 96,
    LITHIUM97 = 97,
    LITHIUM98 = 98,
    LITHIUM99 = 99,
    LITHIUM100 = 100,
    LITHIUM101 = 101,
    LITHIUM102 = 102,
    LITHIUM103 = 103,
    LITHIUM104 = 104,
    LITHIUM105 = 105,
    LITHIUM106 = 106,
    LITHIUM107 = 107,
    LITHIUM108 = 108,
    LITHIUM109 = 109,
    LITHIUM110 = 110,
}

impl FakeOpcode {
    /// The complete placeholder word for this tag: reserved slot, clear
    /// discriminator ([`FAKER_SUBOPCODE`]), tag in the low bits.
    #[must_use]
    pub fn encode(self) -> u32 {
        FAKE_OPCODE | self as u32
    }
}

/// The complete stub marker word for `id`.
#[must_use]
pub fn stub_marker(id: u32) -> u32 {
    debug_assert!(id < 1 << STUB_MARKER_HIGH_BIT);
    FAKE_OPCODE | MARKER_SUBOPCODE | id
}

impl TryFrom<u32> for FakeOpcode {
    type Error = String;

    /// Reads the 7-bit tag field of a reserved-slot word. The caller is
    /// expected to have checked the discriminator already; this conversion
    /// looks at nothing but the tag.
    fn try_from(word: u32) -> Result<Self, Self::Error> {
        match word & ((1 << FAKE_OPCODE_HIGH_BIT) - 1) {
            0 => Ok(Self::MRS),
            1 => Ok(Self::MSR),
            2 => Ok(Self::LDR),
            3 => Ok(Self::STR),
            4 => Ok(Self::LDRB),
            5 => Ok(Self::STRB),
            6 => Ok(Self::LDRH),
            7 => Ok(Self::STRH),
            8 => Ok(Self::LDRSH),
            9 => Ok(Self::LDRD),
            10 => Ok(Self::STRD),
            11 => Ok(Self::LDM),
            12 => Ok(Self::STM),
            14 => Ok(Self::BKPT),
            15 => Ok(Self::SVC),
            16 => Ok(Self::VLDR),
            17 => Ok(Self::VSTR),
            18 => Ok(Self::VMOV),
            19 => Ok(Self::VNEG),
            20 => Ok(Self::VABS),
            21 => Ok(Self::VADD),
            22 => Ok(Self::VSUB),
            23 => Ok(Self::VMUL),
            24 => Ok(Self::VDIV),
            25 => Ok(Self::VCMP),
            26 => Ok(Self::VMSR),
            27 => Ok(Self::VMRS),
            28 => Ok(Self::VSQRT),
            29 => Ok(Self::AND),
            30 => Ok(Self::EOR),
            31 => Ok(Self::RSB),
            32 => Ok(Self::ADC),
            33 => Ok(Self::SBC),
            34 => Ok(Self::RSC),
            35 => Ok(Self::TST),
            36 => Ok(Self::TEQ),
            37 => Ok(Self::CMP),
            38 => Ok(Self::CMN),
            39 => Ok(Self::ORR),
            40 => Ok(Self::BIC),
            41 => Ok(Self::MVN),
            42 => Ok(Self::LDRSB),
            43 => Ok(Self::ADD),
            44 => Ok(Self::Branch),
            60 => Ok(Self::MASM1),
            61 => Ok(Self::MASM3),
            62 => Ok(Self::MASM4),
            63 => Ok(Self::MASM5),
            64 => Ok(Self::MASM6),
            65 => Ok(Self::MASM7),
            66 => Ok(Self::MASM8),
            67 => Ok(Self::MASM12),
            68 => Ok(Self::MASM13),
            69 => Ok(Self::MASM16),
            70 => Ok(Self::MASM17),
            71 => Ok(Self::MASM18),
            72 => Ok(Self::MASM19),
            73 => Ok(Self::MASM20),
            74 => Ok(Self::MASM21),
            75 => Ok(Self::MASM22),
            76 => Ok(Self::MASM23),
            79 => Ok(Self::MASM26),
            80 => Ok(Self::MASM27),
            81 => Ok(Self::MASM28),
            82 => Ok(Self::MASM29),
            90 => Ok(Self::LITHIUM90),
            91 => Ok(Self::LITHIUM91),
            92 => Ok(Self::LITHIUM92),
            93 => Ok(Self::LITHIUM93),
            94 => Ok(Self::LITHIUM94),
            95 => Ok(Self::LITHIUM95),
            96 => Ok(Self::LITHIUM96),
            97 => Ok(Self::LITHIUM97),
            98 => Ok(Self::LITHIUM98),
            99 => Ok(Self::LITHIUM99),
            100 => Ok(Self::LITHIUM100),
            101 => Ok(Self::LITHIUM101),
            102 => Ok(Self::LITHIUM102),
            103 => Ok(Self::LITHIUM103),
            104 => Ok(Self::LITHIUM104),
            105 => Ok(Self::LITHIUM105),
            106 => Ok(Self::LITHIUM106),
            107 => Ok(Self::LITHIUM107),
            108 => Ok(Self::LITHIUM108),
            109 => Ok(Self::LITHIUM109),
            110 => Ok(Self::LITHIUM110),
            tag => Err(format!("Unassigned fake opcode tag: {tag}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_TAGS: [FakeOpcode; 86] = [
        FakeOpcode::MRS,
        FakeOpcode::MSR,
        FakeOpcode::LDR,
        FakeOpcode::STR,
        FakeOpcode::LDRB,
        FakeOpcode::STRB,
        FakeOpcode::LDRH,
        FakeOpcode::STRH,
        FakeOpcode::LDRSH,
        FakeOpcode::LDRD,
        FakeOpcode::STRD,
        FakeOpcode::LDM,
        FakeOpcode::STM,
        FakeOpcode::BKPT,
        FakeOpcode::SVC,
        FakeOpcode::VLDR,
        FakeOpcode::VSTR,
        FakeOpcode::VMOV,
        FakeOpcode::VNEG,
        FakeOpcode::VABS,
        FakeOpcode::VADD,
        FakeOpcode::VSUB,
        FakeOpcode::VMUL,
        FakeOpcode::VDIV,
        FakeOpcode::VCMP,
        FakeOpcode::VMSR,
        FakeOpcode::VMRS,
        FakeOpcode::VSQRT,
        FakeOpcode::AND,
        FakeOpcode::EOR,
        FakeOpcode::RSB,
        FakeOpcode::ADC,
        FakeOpcode::SBC,
        FakeOpcode::RSC,
        FakeOpcode::TST,
        FakeOpcode::TEQ,
        FakeOpcode::CMP,
        FakeOpcode::CMN,
        FakeOpcode::ORR,
        FakeOpcode::BIC,
        FakeOpcode::MVN,
        FakeOpcode::LDRSB,
        FakeOpcode::ADD,
        FakeOpcode::Branch,
        FakeOpcode::MASM1,
        FakeOpcode::MASM3,
        FakeOpcode::MASM4,
        FakeOpcode::MASM5,
        FakeOpcode::MASM6,
        FakeOpcode::MASM7,
        FakeOpcode::MASM8,
        FakeOpcode::MASM12,
        FakeOpcode::MASM13,
        FakeOpcode::MASM16,
        FakeOpcode::MASM17,
        FakeOpcode::MASM18,
        FakeOpcode::MASM19,
        FakeOpcode::MASM20,
        FakeOpcode::MASM21,
        FakeOpcode::MASM22,
        FakeOpcode::MASM23,
        FakeOpcode::MASM26,
        FakeOpcode::MASM27,
        FakeOpcode::MASM28,
        FakeOpcode::MASM29,
        FakeOpcode::LITHIUM90,
        FakeOpcode::LITHIUM91,
        FakeOpcode::LITHIUM92,
        FakeOpcode::LITHIUM93,
        FakeOpcode::LITHIUM94,
        FakeOpcode::LITHIUM95,
        FakeOpcode::LITHIUM96,
        FakeOpcode::LITHIUM97,
        FakeOpcode::LITHIUM98,
        FakeOpcode::LITHIUM99,
        FakeOpcode::LITHIUM100,
        FakeOpcode::LITHIUM101,
        FakeOpcode::LITHIUM102,
        FakeOpcode::LITHIUM103,
        FakeOpcode::LITHIUM104,
        FakeOpcode::LITHIUM105,
        FakeOpcode::LITHIUM106,
        FakeOpcode::LITHIUM107,
        FakeOpcode::LITHIUM108,
        FakeOpcode::LITHIUM109,
        FakeOpcode::LITHIUM110,
    ];

    #[test]
    fn tags_fit_seven_bits() {
        for tag in ALL_TAGS {
            assert!((tag as u32) < 1 << FAKE_OPCODE_HIGH_BIT);
            assert!((tag as u32) < LAST_FAKER);
        }

        assert!(LAST_FAKER < 1 << FAKE_OPCODE_HIGH_BIT);
        assert!(NEXT_AVAILABLE_STUB_MARKER < 1 << STUB_MARKER_HIGH_BIT);
    }

    #[test]
    fn every_tag_round_trips() {
        for tag in ALL_TAGS {
            assert_eq!(FakeOpcode::try_from(tag.encode()), Ok(tag));
        }
    }

    #[test]
    fn encoded_words_sit_in_the_reserved_slot() {
        let word = FakeOpcode::ADD.encode();

        assert_eq!(word >> 26, 1);
        assert_eq!(word & MARKER_SUBOPCODE, FAKER_SUBOPCODE);
        assert_eq!(word & 0x7F, 43);
    }

    #[test]
    fn markers_set_the_discriminator() {
        let word = stub_marker(43);

        assert_eq!(word >> 26, 1);
        assert_eq!(word & MARKER_SUBOPCODE, MARKER_SUBOPCODE);
        assert_eq!(word & 0x1FF, 43);

        let watermark = stub_marker(NEXT_AVAILABLE_STUB_MARKER);
        assert_eq!(watermark & 0x1FF, NEXT_AVAILABLE_STUB_MARKER);
    }

    #[test]
    #[should_panic]
    fn oversized_marker_ids_are_rejected() {
        let _ = stub_marker(1 << STUB_MARKER_HIGH_BIT);
    }

    #[test]
    fn retired_and_unassigned_tags_miss() {
        for tag in [13, 45, 59, 77, 78, 83, 89, 111, 127] {
            assert!(FakeOpcode::try_from(FAKE_OPCODE | tag).is_err());
        }
    }
}
